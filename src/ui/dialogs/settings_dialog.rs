use fltk::{
    button::{Button, CheckButton, RadioRoundButton},
    frame::Frame,
    group::Group,
    input::{Input, IntInput},
    menu::Choice,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::{AppSettings, FontChoice, SyntaxTheme, ThemeMode};

/// Show settings dialog and return updated settings if user clicked Save.
pub fn show_settings_dialog(current_settings: &AppSettings) -> Option<AppSettings> {
    let mut dialog = Window::default()
        .with_size(350, 770)
        .with_label("Settings")
        .center_screen();
    dialog.make_modal(true);

    let vpack = Group::default()
        .with_size(320, 680)
        .with_pos(15, 15);

    // Server section
    Frame::default().with_pos(15, 15).with_size(320, 25).with_label("Server URL:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut server_input = Input::default().with_pos(30, 45).with_size(280, 25);
    server_input.set_value(&current_settings.server_url);

    Frame::default().with_pos(15, 75).with_size(320, 25).with_label("Request timeout (seconds):").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut timeout_input = IntInput::default().with_pos(30, 105).with_size(280, 25);
    timeout_input.set_value(&current_settings.request_timeout_secs.to_string());

    // Theme section
    Frame::default().with_pos(15, 140).with_size(320, 25).with_label("Theme:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let theme_group = Group::default().with_pos(30, 170).with_size(280, 75);
    let mut theme_light = RadioRoundButton::default().with_pos(30, 170).with_size(280, 25).with_label("Light");
    let mut theme_dark = RadioRoundButton::default().with_pos(30, 195).with_size(280, 25).with_label("Dark");
    let mut theme_system = RadioRoundButton::default().with_pos(30, 220).with_size(280, 25).with_label("System Default");
    theme_group.end();

    match current_settings.theme_mode {
        ThemeMode::Light => theme_light.set_value(true),
        ThemeMode::Dark => theme_dark.set_value(true),
        ThemeMode::SystemDefault => theme_system.set_value(true),
    }

    // Syntax Theme section
    Frame::default().with_pos(15, 255).with_size(320, 25).with_label("Syntax Theme (Light Mode):").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut theme_light_choice = Choice::default().with_pos(30, 285).with_size(280, 25);
    for theme in SyntaxTheme::all() {
        theme_light_choice.add_choice(theme.display_name());
    }
    theme_light_choice.set_value(theme_index(current_settings.syntax_theme_light));

    Frame::default().with_pos(15, 315).with_size(320, 25).with_label("Syntax Theme (Dark Mode):").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut theme_dark_choice = Choice::default().with_pos(30, 345).with_size(280, 25);
    for theme in SyntaxTheme::all() {
        theme_dark_choice.add_choice(theme.display_name());
    }
    theme_dark_choice.set_value(theme_index(current_settings.syntax_theme_dark));

    // Font section
    Frame::default().with_pos(15, 380).with_size(320, 25).with_label("Font:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let font_group = Group::default().with_pos(30, 410).with_size(280, 75);
    let mut font_screenbold = RadioRoundButton::default().with_pos(30, 410).with_size(280, 25).with_label("Screen (Bold)");
    let mut font_courier = RadioRoundButton::default().with_pos(30, 435).with_size(280, 25).with_label("Courier");
    let mut font_helvetica = RadioRoundButton::default().with_pos(30, 460).with_size(280, 25).with_label("Helvetica Mono");
    font_group.end();

    match current_settings.font {
        FontChoice::ScreenBold => font_screenbold.set_value(true),
        FontChoice::Courier => font_courier.set_value(true),
        FontChoice::HelveticaMono => font_helvetica.set_value(true),
    }

    // Font size section
    Frame::default().with_pos(15, 495).with_size(320, 25).with_label("Font Size:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let size_group = Group::default().with_pos(30, 525).with_size(280, 75);
    let mut size_12 = RadioRoundButton::default().with_pos(30, 525).with_size(280, 25).with_label("Small (12)");
    let mut size_16 = RadioRoundButton::default().with_pos(30, 550).with_size(280, 25).with_label("Medium (16)");
    let mut size_20 = RadioRoundButton::default().with_pos(30, 575).with_size(280, 25).with_label("Large (20)");
    size_group.end();

    match current_settings.font_size {
        12 => size_12.set_value(true),
        16 => size_16.set_value(true),
        20 => size_20.set_value(true),
        _ => size_16.set_value(true),
    }

    // View options section
    Frame::default().with_pos(15, 610).with_size(320, 25).with_label("View Options:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut check_line_numbers = CheckButton::default().with_pos(30, 640).with_size(280, 25).with_label("Show Line Numbers");
    let mut check_word_wrap = CheckButton::default().with_pos(30, 665).with_size(280, 25).with_label("Word Wrap");
    let mut check_highlighting = CheckButton::default().with_pos(30, 690).with_size(280, 25).with_label("Syntax Highlighting");

    check_line_numbers.set_value(current_settings.line_numbers_enabled);
    check_word_wrap.set_value(current_settings.word_wrap_enabled);
    check_highlighting.set_value(current_settings.highlighting_enabled);

    vpack.end();

    // Buttons at bottom
    let mut save_btn = Button::default().with_pos(150, 725).with_size(90, 30).with_label("Save");
    let mut cancel_btn = Button::default().with_pos(250, 725).with_size(90, 30).with_label("Cancel");

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));
    let result_save = result.clone();
    let result_cancel = result.clone();

    let dialog_save = dialog.clone();
    let current = current_settings.clone();
    save_btn.set_callback(move |_| {
        let url = server_input.value().trim().trim_end_matches('/').to_string();
        let new_settings = AppSettings {
            server_url: if url.is_empty() { current.server_url.clone() } else { url },
            request_timeout_secs: timeout_input
                .value()
                .parse()
                .ok()
                .filter(|&t| t > 0)
                .unwrap_or(current.request_timeout_secs),
            theme_mode: if theme_light.value() {
                ThemeMode::Light
            } else if theme_dark.value() {
                ThemeMode::Dark
            } else {
                ThemeMode::SystemDefault
            },
            font: if font_screenbold.value() {
                FontChoice::ScreenBold
            } else if font_courier.value() {
                FontChoice::Courier
            } else {
                FontChoice::HelveticaMono
            },
            font_size: if size_12.value() {
                12
            } else if size_20.value() {
                20
            } else {
                16
            },
            line_numbers_enabled: check_line_numbers.value(),
            word_wrap_enabled: check_word_wrap.value(),
            highlighting_enabled: check_highlighting.value(),
            syntax_theme_light: index_to_theme(theme_light_choice.value()).unwrap_or(current.syntax_theme_light),
            syntax_theme_dark: index_to_theme(theme_dark_choice.value()).unwrap_or(current.syntax_theme_dark),
        };

        *result_save.borrow_mut() = Some(new_settings);
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        *result_cancel.borrow_mut() = None;
        dialog_cancel.clone().hide();
    });

    let result_close = result.clone();
    dialog.set_callback(move |w| {
        *result_close.borrow_mut() = None;
        w.hide();
    });

    super::run_dialog(&dialog);

    let selected = result.borrow().clone();
    selected
}

/// Convert SyntaxTheme to dropdown index
fn theme_index(theme: SyntaxTheme) -> i32 {
    SyntaxTheme::all()
        .iter()
        .position(|t| *t == theme)
        .map(|i| i as i32)
        .unwrap_or(0)
}

/// Convert dropdown index to SyntaxTheme
fn index_to_theme(index: i32) -> Option<SyntaxTheme> {
    if index < 0 {
        return None;
    }
    SyntaxTheme::all().get(index as usize).copied()
}
