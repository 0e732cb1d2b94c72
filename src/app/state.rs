use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use std::thread;

use fltk::{
    app::Sender,
    browser::HoldBrowser,
    dialog,
    enums::{Color, Font},
    frame::Frame,
    group::Flex,
    input::{Input, MultilineInput},
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextDisplay, TextEditor, WrapMode},
    window::Window,
};

use super::domain::document::Document;
use super::domain::messages::Message;
use super::domain::settings::{AppSettings, FontChoice, ThemeMode};
use super::domain::tasks::TaskQueue;
use super::infrastructure::error::{ApiError, AppError};
use super::infrastructure::platform::detect_system_dark_mode;
use super::services::api::{RemoteFile, SpecDocument, WorkspaceApi};
use super::services::highlight::{self, SyntaxHighlighter};
use super::services::preview::PreviewPublisher;
use super::services::requests::{RequestKind, RequestToken, RequestTracker};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::settings_dialog::show_settings_dialog;
use crate::ui::file_dialogs::native_save_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::{apply_theme, ThemeTargets};

pub struct AppState {
    pub document: Document,
    pub tasks: TaskQueue,

    pub window: Window,
    pub menu: MenuBar,
    pub flex: Flex,
    pub banner_frame: Frame,
    pub file_browser: HoldBrowser,
    pub path_input: Input,
    pub current_file_label: Frame,
    pub editor: TextEditor,
    pub preview: HelpView,
    pub prompt_input: MultilineInput,
    pub spec_display: TextDisplay,
    pub task_browser: HoldBrowser,
    pub header_frames: Vec<Frame>,

    pub api: WorkspaceApi,
    pub requests: RequestTracker,
    pub preview_files: PreviewPublisher,
    pub highlighter: SyntaxHighlighter,
    pub pending_rehighlight: bool,
    pub rehighlight_timer_active: bool,
    pub highlighting_enabled: bool,

    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub dark_mode: bool,
    pub show_linenumbers: bool,
    pub word_wrap: bool,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        dark_mode: bool,
    ) -> Self {
        let MainWidgets {
            wind,
            flex,
            menu,
            banner_frame,
            file_browser,
            path_input,
            current_file_label,
            text_editor,
            preview,
            prompt_input,
            spec_display,
            task_browser,
            header_frames,
        } = widgets;

        let document = Document::new(sender);

        let (api, highlighter, show_linenumbers, word_wrap, highlighting_enabled) = {
            let s = settings.borrow();
            let font = match s.font {
                FontChoice::ScreenBold => Font::ScreenBold,
                FontChoice::Courier => Font::Courier,
                FontChoice::HelveticaMono => Font::Screen,
            };
            (
                WorkspaceApi::new(&s.server_url, s.request_timeout_secs),
                SyntaxHighlighter::new(s.current_syntax_theme(dark_mode), font, s.font_size as i32),
                s.line_numbers_enabled,
                s.word_wrap_enabled,
                s.highlighting_enabled,
            )
        };

        let mut state = Self {
            document,
            tasks: TaskQueue::new(),
            window: wind,
            menu,
            flex,
            banner_frame,
            file_browser,
            path_input,
            current_file_label,
            editor: text_editor,
            preview,
            prompt_input,
            spec_display,
            task_browser,
            header_frames,
            api,
            requests: RequestTracker::new(),
            preview_files: PreviewPublisher::new(),
            highlighter,
            pending_rehighlight: false,
            rehighlight_timer_active: false,
            highlighting_enabled,
            sender,
            settings,
            dark_mode,
            show_linenumbers,
            word_wrap,
        };
        state.bind_document();
        state
    }

    /// Bind the document's buffers to the editor
    pub fn bind_document(&mut self) {
        self.editor.set_buffer(self.document.buffer.clone());
        self.editor.set_highlight_data(
            self.document.style_buffer.clone(),
            self.highlighter.style_table(),
        );
        self.update_linenumber_width();
    }

    /// Update the window title and file label from the open document
    pub fn update_window_title(&mut self) {
        let prefix = if self.document.is_dirty() { "*" } else { "" };
        let name = self.document.display_name().to_string();
        self.window.set_label(&format!("{}{} - SpecDeck", prefix, name));
        let indicator = if self.document.remote_path.is_some() {
            format!("  {}{}  [{}]", prefix, name, self.document.mode.label())
        } else {
            format!("  {}{}", prefix, name)
        };
        self.current_file_label.set_label(&indicator);
    }

    // --- Error banner ---

    /// Surface a failed backend call: log it and show the banner.
    pub fn report_error(&mut self, context: &str, error: &ApiError) {
        eprintln!("{}: {}", context, error);
        self.banner_frame
            .set_label(&format!("  {}: {} (click to dismiss)", context, error));
        self.banner_frame.show();
        self.flex.fixed(&self.banner_frame, 30);
        self.window.redraw();
    }

    pub fn dismiss_banner(&mut self) {
        self.banner_frame.hide();
        self.flex.fixed(&self.banner_frame, 0);
        self.window.redraw();
    }

    // --- Workspace files ---

    pub fn refresh_files(&mut self) {
        let api = self.api.clone();
        let sender = self.sender;
        let token = self.requests.begin(RequestKind::ListFiles);
        thread::spawn(move || {
            sender.send(Message::FilesLoaded(token, api.list_files()));
        });
    }

    pub fn files_loaded(&mut self, token: RequestToken, result: Result<Vec<String>, ApiError>) {
        if !self.requests.is_current(token) {
            return;
        }
        match result {
            Ok(files) => {
                self.file_browser.clear();
                for file in &files {
                    self.file_browser.add(file);
                }
                // Keep the open file marked as selected across refreshes
                if let Some(ref path) = self.document.remote_path
                    && let Some(idx) = files.iter().position(|f| f == path)
                {
                    self.file_browser.select(idx as i32 + 1);
                }
            }
            Err(e) => self.report_error("Could not list files", &e),
        }
    }

    pub fn open_file(&mut self, path: String) {
        let api = self.api.clone();
        let sender = self.sender;
        let token = self.requests.begin(RequestKind::OpenFile);
        thread::spawn(move || {
            sender.send(Message::FileOpened(token, api.read_file(&path)));
        });
    }

    pub fn file_opened(&mut self, token: RequestToken, result: Result<RemoteFile, ApiError>) {
        if !self.requests.is_current(token) {
            return;
        }
        match result {
            Ok(file) => {
                self.document.load_remote(&file);
                self.update_window_title();
                self.update_linenumber_width();
                self.apply_highlight();
                self.refresh_preview();
            }
            Err(e) => self.report_error("Could not open file", &e),
        }
    }

    pub fn create_file(&mut self) {
        let path = self.path_input.value().trim().to_string();
        if path.is_empty() {
            return;
        }
        let api = self.api.clone();
        let sender = self.sender;
        let token = self.requests.begin(RequestKind::CreateFile);
        thread::spawn(move || {
            sender.send(Message::FileCreated(token, api.write_file(&path, "")));
        });
    }

    pub fn file_created(&mut self, token: RequestToken, result: Result<(), ApiError>) {
        if !self.requests.is_current(token) {
            return;
        }
        match result {
            Ok(()) => {
                self.path_input.set_value("");
                self.refresh_files();
            }
            // Input keeps its text on failure so the user can correct it
            Err(e) => self.report_error("Could not create file", &e),
        }
    }

    pub fn save_file(&mut self) {
        let Some(path) = self.document.remote_path.clone() else {
            return;
        };
        let content = self.document.text();
        let api = self.api.clone();
        let sender = self.sender;
        let token = self.requests.begin(RequestKind::SaveFile);
        thread::spawn(move || {
            let result = api.write_file(&path, &content);
            sender.send(Message::FileSaved(token, path, result));
        });
    }

    pub fn file_saved(&mut self, token: RequestToken, path: String, result: Result<(), ApiError>) {
        if !self.requests.is_current(token) {
            return;
        }
        match result {
            Ok(()) => {
                // Only confirm if the same file is still open
                if self.document.remote_path.as_deref() == Some(path.as_str()) {
                    self.document.mark_clean();
                    self.update_window_title();
                }
                self.refresh_preview();
            }
            Err(e) => self.report_error("Could not save file", &e),
        }
    }

    /// Save synchronously. Used by the quit flow, where the app must not
    /// exit before the backend confirms. Returns `true` on success.
    fn save_file_blocking(&mut self) -> bool {
        let Some(path) = self.document.remote_path.clone() else {
            return true;
        };
        match self.api.write_file(&path, &self.document.text()) {
            Ok(()) => {
                self.document.mark_clean();
                true
            }
            Err(e) => {
                dialog::alert_default(&format!("Error saving file: {}", e));
                false
            }
        }
    }

    pub fn delete_file(&mut self) {
        let Some(path) = self.document.remote_path.clone() else {
            return;
        };
        let choice = dialog::choice2_default(
            &format!("Delete {} from the workspace?", path),
            "Delete",
            "Cancel",
            "",
        );
        if choice != Some(0) {
            return;
        }
        let api = self.api.clone();
        let sender = self.sender;
        let token = self.requests.begin(RequestKind::DeleteFile);
        thread::spawn(move || {
            let result = api.delete_file(&path);
            sender.send(Message::FileDeleted(token, path, result));
        });
    }

    pub fn file_deleted(
        &mut self,
        token: RequestToken,
        path: String,
        result: Result<(), ApiError>,
    ) {
        if !self.requests.is_current(token) {
            return;
        }
        match result {
            Ok(()) => {
                if self.document.remote_path.as_deref() == Some(path.as_str()) {
                    self.document.reset();
                    self.update_window_title();
                    self.update_linenumber_width();
                }
                self.refresh_files();
            }
            Err(e) => self.report_error("Could not delete file", &e),
        }
    }

    pub fn download_workspace(&mut self) {
        let Some(dest) = native_save_dialog("*.zip", "workspace.zip") else {
            return;
        };
        let api = self.api.clone();
        let sender = self.sender;
        thread::spawn(move || {
            let result = api
                .download_workspace()
                .map_err(AppError::from)
                .and_then(|bytes| fs::write(&dest, bytes).map_err(AppError::from));
            sender.send(Message::WorkspaceSaved(dest, result));
        });
    }

    pub fn workspace_saved(&mut self, dest: String, result: Result<(), AppError>) {
        match result {
            Ok(()) => dialog::message_default(&format!("Workspace saved to {}", dest)),
            Err(e) => dialog::alert_default(&format!("Error downloading workspace: {}", e)),
        }
    }

    // --- Preview ---

    pub fn refresh_preview(&mut self) {
        let api = self.api.clone();
        let sender = self.sender;
        let token = self.requests.begin(RequestKind::Preview);
        thread::spawn(move || {
            sender.send(Message::PreviewLoaded(token, api.read_file("index.html")));
        });
    }

    pub fn preview_loaded(&mut self, token: RequestToken, result: Result<RemoteFile, ApiError>) {
        if !self.requests.is_current(token) {
            return;
        }
        match result {
            Ok(file) => match self.preview_files.publish(&file.content) {
                Ok(path) => {
                    let target = path.display().to_string();
                    let _ = self.preview.load(&target);
                    self.preview.redraw();
                }
                Err(e) => eprintln!("Failed to publish preview: {}", e),
            },
            // No index.html yet: keep whatever the pane already shows
            Err(ref e) if e.is_not_found() => {}
            Err(e) => self.report_error("Could not load preview", &e),
        }
    }

    pub fn open_preview_in_browser(&mut self) {
        match self.preview_files.current_file() {
            Some(path) => {
                if let Err(e) = open::that(path) {
                    dialog::alert_default(&format!("Could not open browser: {}", e));
                }
            }
            None => dialog::message_default("No preview yet. The workspace needs an index.html."),
        }
    }

    // --- Planner ---

    pub fn generate_spec(&mut self) {
        let prompt = self.prompt_input.value().trim().to_string();
        let api = self.api.clone();
        let sender = self.sender;
        let token = self.requests.begin(RequestKind::GenerateSpec);
        thread::spawn(move || {
            sender.send(Message::SpecGenerated(token, api.generate_spec(&prompt)));
        });
    }

    pub fn spec_generated(&mut self, token: RequestToken, result: Result<SpecDocument, ApiError>) {
        if !self.requests.is_current(token) {
            return;
        }
        match result {
            Ok(doc) => {
                if let Some(mut buffer) = self.spec_display.buffer() {
                    buffer.set_text(&doc.raw);
                }
                // Tasks stay as they are until the user re-derives them
            }
            Err(e) => self.report_error("Could not generate spec", &e),
        }
    }

    pub fn derive_tasks(&mut self) {
        let raw = self
            .spec_display
            .buffer()
            .map(|b| b.text())
            .unwrap_or_default();
        let api = self.api.clone();
        let sender = self.sender;
        let token = self.requests.begin(RequestKind::DeriveTasks);
        thread::spawn(move || {
            sender.send(Message::TasksDerived(token, api.derive_tasks(&raw)));
        });
    }

    pub fn tasks_derived(&mut self, token: RequestToken, result: Result<Vec<String>, ApiError>) {
        if !self.requests.is_current(token) {
            return;
        }
        match result {
            Ok(tasks) => {
                self.tasks.replace(tasks);
                self.refresh_task_browser();
            }
            Err(e) => self.report_error("Could not derive tasks", &e),
        }
    }

    pub fn apply_task(&mut self) {
        let task = self.tasks.next_task();
        let api = self.api.clone();
        let sender = self.sender;
        let token = self.requests.begin(RequestKind::ApplyTask);
        thread::spawn(move || {
            let result = api.apply_task(&task);
            sender.send(Message::TaskApplied(token, task, result));
        });
    }

    pub fn task_applied(&mut self, token: RequestToken, task: String, result: Result<(), ApiError>) {
        if !self.requests.is_current(token) {
            return;
        }
        match result {
            Ok(()) => {
                // Drop the head only on confirmed success, and only if it is
                // still the task that was submitted
                if self.tasks.complete(&task) {
                    self.refresh_task_browser();
                }
                self.refresh_files();
                self.refresh_preview();
            }
            Err(e) => self.report_error("Could not apply task", &e),
        }
    }

    fn refresh_task_browser(&mut self) {
        self.task_browser.clear();
        for task in self.tasks.tasks() {
            self.task_browser.add(task);
        }
    }

    // --- Editor / highlighting ---

    pub fn buffer_modified(&mut self) {
        self.update_window_title();
        self.update_linenumber_width();
        self.schedule_rehighlight();
    }

    pub fn schedule_rehighlight(&mut self) {
        if !self.highlighting_enabled {
            return;
        }
        self.pending_rehighlight = true;
        if !self.rehighlight_timer_active {
            self.rehighlight_timer_active = true;
            let s = self.sender;
            fltk::app::add_timeout3(0.15, move |_| {
                s.send(Message::RehighlightTick);
            });
        }
    }

    pub fn rehighlight_tick(&mut self) {
        self.rehighlight_timer_active = false;
        if self.pending_rehighlight {
            self.pending_rehighlight = false;
            self.apply_highlight();
        }
    }

    /// Re-style the whole document and rebind the style table.
    pub fn apply_highlight(&mut self) {
        let text = self.document.text();
        if self.highlighting_enabled {
            let styles = self.highlighter.highlight(&text, self.document.mode);
            self.document.style_buffer.set_text(&styles);
            let (r, g, b) = self.highlighter.theme_background();
            self.editor.set_color(Color::from_rgb(r, g, b));
            let (r, g, b) = self.highlighter.theme_foreground();
            self.editor.set_cursor_color(Color::from_rgb(r, g, b));
        } else {
            self.document
                .style_buffer
                .set_text(&highlight::plain_style(&text));
        }
        self.editor.set_highlight_data(
            self.document.style_buffer.clone(),
            self.highlighter.style_table(),
        );
        self.editor.redraw();
    }

    // --- View toggles ---

    pub fn update_linenumber_width(&mut self) {
        if !self.show_linenumbers {
            self.editor.set_linenumber_width(0);
            return;
        }
        let buffer = &self.document.buffer;
        let line_count = buffer.count_lines(0, buffer.length());
        let digits = ((line_count + 1) as f64).log10().floor() as i32 + 1;
        let width = (digits * 8 + 16).max(40);
        self.editor.set_linenumber_width(width);
    }

    pub fn toggle_line_numbers(&mut self) {
        self.show_linenumbers = !self.show_linenumbers;
        self.update_linenumber_width();
        self.editor.redraw();
    }

    pub fn toggle_word_wrap(&mut self) {
        self.word_wrap = !self.word_wrap;
        if self.word_wrap {
            self.editor.wrap_mode(WrapMode::AtBounds, 0);
        } else {
            self.editor.wrap_mode(WrapMode::None, 0);
        }
        self.editor.redraw();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.apply_theme_targets();
        let theme = self.settings.borrow().current_syntax_theme(self.dark_mode);
        self.highlighter.set_theme(theme);
        self.apply_highlight();
    }

    pub fn toggle_highlighting(&mut self) {
        self.highlighting_enabled = !self.highlighting_enabled;
        {
            let mut s = self.settings.borrow_mut();
            s.highlighting_enabled = self.highlighting_enabled;
            let _ = s.save();
        }
        if !self.highlighting_enabled {
            // Back to flat editor colors
            self.apply_theme_targets();
        }
        self.apply_highlight();
    }

    fn apply_theme_targets(&mut self) {
        apply_theme(
            &mut ThemeTargets {
                window: &mut self.window,
                menu: &mut self.menu,
                editor: &mut self.editor,
                spec_display: &mut self.spec_display,
                banner: &mut self.banner_frame,
                current_file_label: &mut self.current_file_label,
                header_frames: &mut self.header_frames,
            },
            self.dark_mode,
        );
    }

    // --- Settings ---

    pub fn open_settings(&mut self) {
        let current = self.settings.borrow().clone();
        if let Some(new_settings) = show_settings_dialog(&current) {
            if let Err(e) = new_settings.save() {
                dialog::alert_default(&format!("Failed to save settings: {}", e));
                return;
            }
            self.apply_settings(new_settings);
        }
    }

    pub fn apply_settings(&mut self, new_settings: AppSettings) {
        let is_dark = match new_settings.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::SystemDefault => detect_system_dark_mode(),
        };
        self.dark_mode = is_dark;
        self.apply_theme_targets();
        self.update_menu_checkbox("View/Toggle Dark Mode", is_dark);

        let font = match new_settings.font {
            FontChoice::ScreenBold => Font::ScreenBold,
            FontChoice::Courier => Font::Courier,
            FontChoice::HelveticaMono => Font::Screen,
        };
        self.editor.set_text_font(font);
        self.editor.set_text_size(new_settings.font_size as i32);
        self.spec_display.set_text_font(font);
        self.spec_display.set_text_size(new_settings.font_size as i32);

        self.highlighter
            .set_theme(new_settings.current_syntax_theme(is_dark));
        self.highlighter.set_font(font, new_settings.font_size as i32);

        self.show_linenumbers = new_settings.line_numbers_enabled;
        self.update_linenumber_width();
        self.update_menu_checkbox("View/Toggle Line Numbers", self.show_linenumbers);

        self.word_wrap = new_settings.word_wrap_enabled;
        if self.word_wrap {
            self.editor.wrap_mode(WrapMode::AtBounds, 0);
        } else {
            self.editor.wrap_mode(WrapMode::None, 0);
        }
        self.update_menu_checkbox("View/Toggle Word Wrap", self.word_wrap);

        self.highlighting_enabled = new_settings.highlighting_enabled;
        self.update_menu_checkbox("View/Toggle Syntax Highlighting", self.highlighting_enabled);

        let server_changed = {
            let old = self.settings.borrow();
            old.server_url != new_settings.server_url
                || old.request_timeout_secs != new_settings.request_timeout_secs
        };
        self.api = WorkspaceApi::new(&new_settings.server_url, new_settings.request_timeout_secs);

        *self.settings.borrow_mut() = new_settings;

        self.apply_highlight();

        if server_changed {
            self.refresh_files();
            self.refresh_preview();
        }
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }

    // --- Help / shutdown ---

    pub fn show_about(&mut self) {
        show_about_dialog();
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn quit(&mut self) -> bool {
        if !self.document.is_dirty() {
            return true;
        }
        let choice = dialog::choice2_default(
            "You have unsaved changes.",
            "Save",
            "Quit Without Saving",
            "Cancel",
        );
        match choice {
            Some(0) => self.save_file_blocking(),
            Some(1) => true,
            _ => false,
        }
    }

    /// Best-effort teardown of published preview files.
    pub fn cleanup(&mut self) {
        self.preview_files.cleanup();
    }
}
