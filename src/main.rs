use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use fltk::{app, enums::Event, prelude::*};

use spec_deck::app::domain::{AppSettings, Message, ThemeMode};
use spec_deck::app::infrastructure::platform::detect_system_dark_mode;
use spec_deck::app::state::AppState;
use spec_deck::ui::main_window::build_main_window;
use spec_deck::ui::menu::build_menu;

fn main() {
    let a = app::App::default();

    let mut settings = AppSettings::load();
    // Optional override for this run: `SpecDeck http://host:port`
    if let Some(url) = env::args().nth(1) {
        settings.server_url = url.trim_end_matches('/').to_string();
    }

    let dark_mode = match settings.theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };

    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, &settings, dark_mode);

    // Close button asks for confirmation like File/Quit; ignore Escape
    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::Quit);
            }
        }
    });

    let settings = Rc::new(RefCell::new(settings));
    let mut state = AppState::new(widgets, sender, settings.clone(), dark_mode);

    let initial = settings.borrow().clone();
    state.apply_settings(initial);

    state.window.show();

    state.refresh_files();
    state.refresh_preview();

    while a.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::RefreshFiles => state.refresh_files(),
                Message::FilesLoaded(token, result) => state.files_loaded(token, result),
                Message::OpenFile(path) => state.open_file(path),
                Message::FileOpened(token, result) => state.file_opened(token, result),
                Message::CreateFile => state.create_file(),
                Message::FileCreated(token, result) => state.file_created(token, result),
                Message::SaveFile => state.save_file(),
                Message::FileSaved(token, path, result) => state.file_saved(token, path, result),
                Message::DeleteFile => state.delete_file(),
                Message::FileDeleted(token, path, result) => state.file_deleted(token, path, result),
                Message::DownloadWorkspace => state.download_workspace(),
                Message::WorkspaceSaved(dest, result) => state.workspace_saved(dest, result),
                Message::RefreshPreview => state.refresh_preview(),
                Message::PreviewLoaded(token, result) => state.preview_loaded(token, result),
                Message::OpenPreviewInBrowser => state.open_preview_in_browser(),
                Message::GenerateSpec => state.generate_spec(),
                Message::SpecGenerated(token, result) => state.spec_generated(token, result),
                Message::DeriveTasks => state.derive_tasks(),
                Message::TasksDerived(token, result) => state.tasks_derived(token, result),
                Message::ApplyTask => state.apply_task(),
                Message::TaskApplied(token, task, result) => state.task_applied(token, task, result),
                Message::BufferModified => state.buffer_modified(),
                Message::RehighlightTick => state.rehighlight_tick(),
                Message::ToggleLineNumbers => state.toggle_line_numbers(),
                Message::ToggleWordWrap => state.toggle_word_wrap(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::ToggleHighlighting => state.toggle_highlighting(),
                Message::OpenSettings => state.open_settings(),
                Message::ShowAbout => state.show_about(),
                Message::DismissBanner => state.dismiss_banner(),
                Message::Quit => {
                    if state.quit() {
                        state.cleanup();
                        app::quit();
                    }
                }
            }
        }
    }
}
