use std::cell::Cell;
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use super::editor_mode::EditorMode;
use super::messages::Message;
use crate::app::services::api::RemoteFile;

/// The single document shown in the editor: the text buffer, its style
/// buffer, and which workspace file (if any) it mirrors.
///
/// The buffer is replaced wholesale when a file is opened; local edits live
/// only here until an explicit save pushes them to the backend.
pub struct Document {
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub remote_path: Option<String>,
    pub mode: EditorMode,
    pub has_unsaved_changes: Rc<Cell<bool>>,
}

impl Document {
    pub fn new(sender: Sender<Message>) -> Self {
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        let has_unsaved_changes = Rc::new(Cell::new(false));

        let changes = has_unsaved_changes.clone();
        let mut style_buf = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                changes.set(true);
                // Keep the style buffer length-synced until the next rehighlight.
                if inserted > 0 {
                    let filler = "A".repeat(inserted as usize);
                    style_buf.insert(pos, &filler);
                }
                if deleted > 0 {
                    style_buf.remove(pos, pos + deleted);
                }
                sender.send(Message::BufferModified);
            }
        });

        Self {
            buffer,
            style_buffer,
            remote_path: None,
            mode: EditorMode::default(),
            has_unsaved_changes,
        }
    }

    /// Replace the document with a freshly fetched workspace file.
    pub fn load_remote(&mut self, file: &RemoteFile) {
        self.buffer.set_text(&file.content);
        let default_style = "A".repeat(file.content.len());
        self.style_buffer.set_text(&default_style);
        self.remote_path = Some(file.path.clone());
        self.mode = EditorMode::from_path(&file.path);
        self.has_unsaved_changes.set(false);
    }

    /// Back to the no-file state (e.g. after the open file was deleted).
    pub fn reset(&mut self) {
        self.buffer.set_text("");
        self.style_buffer.set_text("");
        self.remote_path = None;
        self.mode = EditorMode::default();
        self.has_unsaved_changes.set(false);
    }

    pub fn is_dirty(&self) -> bool {
        self.has_unsaved_changes.get()
    }

    pub fn mark_clean(&self) {
        self.has_unsaved_changes.set(false);
    }

    pub fn display_name(&self) -> &str {
        self.remote_path.as_deref().unwrap_or("(no file)")
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }
}
