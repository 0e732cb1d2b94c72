use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{AppSettings, Message};

pub fn build_menu(
    menu: &mut MenuBar,
    sender: &Sender<Message>,
    settings: &AppSettings,
    initial_dark_mode: bool,
) {
    let s = sender;

    // File
    menu.add("File/Refresh Files", Shortcut::Ctrl | 'r', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::RefreshFiles) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SaveFile) });
    menu.add("File/Delete File...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::DeleteFile) });
    menu.add("File/Download Workspace...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::DownloadWorkspace) });
    menu.add("File/Settings...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenSettings) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Planner
    menu.add("Planner/Generate Spec", Shortcut::Ctrl | 'g', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::GenerateSpec) });
    menu.add("Planner/Derive Tasks", Shortcut::Ctrl | 'd', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::DeriveTasks) });
    menu.add("Planner/Apply Next Task", Shortcut::Ctrl | Shortcut::Shift | 'a', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ApplyTask) });

    // View
    menu.add("View/Refresh Preview", Shortcut::Ctrl | 'p', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::RefreshPreview) });
    menu.add("View/Open Preview in Browser", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenPreviewInBrowser) });
    let ln_flag = if settings.line_numbers_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Line Numbers", Shortcut::None, ln_flag, { let s = *s; move |_| s.send(Message::ToggleLineNumbers) });
    let ww_flag = if settings.word_wrap_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Word Wrap", Shortcut::None, ww_flag, { let s = *s; move |_| s.send(Message::ToggleWordWrap) });
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    let hl_flag = if settings.highlighting_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Syntax Highlighting", Shortcut::None, hl_flag, { let s = *s; move |_| s.send(Message::ToggleHighlighting) });

    // Help
    menu.add("Help/About SpecDeck", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
