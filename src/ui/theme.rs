use fltk::{
    app,
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::{TextDisplay, TextEditor},
    window::Window,
};

pub struct ThemeTargets<'a> {
    pub window: &'a mut Window,
    pub menu: &'a mut MenuBar,
    pub editor: &'a mut TextEditor,
    pub spec_display: &'a mut TextDisplay,
    pub banner: &'a mut Frame,
    pub current_file_label: &'a mut Frame,
    pub header_frames: &'a mut [Frame],
}

pub fn apply_theme(targets: &mut ThemeTargets, is_dark: bool) {
    if is_dark {
        // Globals cover browsers and inputs (Background2/Foreground widgets)
        app::background(25, 25, 25);
        app::background2(30, 30, 30);
        app::foreground(220, 220, 220);
        targets.window.set_color(Color::from_rgb(25, 25, 25));
        targets.window.set_label_color(Color::from_rgb(220, 220, 220));
        targets.menu.set_color(Color::from_rgb(35, 35, 35));
        targets.menu.set_text_color(Color::from_rgb(220, 220, 220));
        targets.menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        targets.banner.set_color(Color::from_rgb(139, 128, 0)); // Darker yellow/olive
        targets.banner.set_label_color(Color::White);
        targets
            .current_file_label
            .set_label_color(Color::from_rgb(220, 220, 220));
        for frame in targets.header_frames.iter_mut() {
            frame.set_label_color(Color::from_rgb(150, 150, 150));
        }
    } else {
        app::background(240, 240, 240);
        app::background2(255, 255, 255);
        app::foreground(0, 0, 0);
        targets.window.set_color(Color::from_rgb(240, 240, 240));
        targets.window.set_label_color(Color::Black);
        targets.menu.set_color(Color::from_rgb(240, 240, 240));
        targets.menu.set_text_color(Color::Black);
        targets.menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        targets.banner.set_color(Color::from_rgb(255, 250, 205)); // Lemon chiffon
        targets.banner.set_label_color(Color::Black);
        targets.current_file_label.set_label_color(Color::Black);
        for frame in targets.header_frames.iter_mut() {
            frame.set_label_color(Color::from_rgb(100, 100, 100));
        }
    }

    apply_display_colors(targets.editor, is_dark);
    apply_display_colors(targets.spec_display, is_dark);

    targets.window.redraw();
    targets.menu.redraw();
}

fn apply_display_colors<D: DisplayExt>(display: &mut D, is_dark: bool) {
    if is_dark {
        display.set_color(Color::from_rgb(30, 30, 30));
        display.set_text_color(Color::from_rgb(220, 220, 220));
        display.set_cursor_color(Color::from_rgb(255, 255, 255));
        display.set_selection_color(Color::from_rgb(70, 70, 100));
        display.set_linenumber_bgcolor(Color::from_rgb(40, 40, 40));
        display.set_linenumber_fgcolor(Color::from_rgb(150, 150, 150));
    } else {
        display.set_color(Color::White);
        display.set_text_color(Color::Black);
        display.set_cursor_color(Color::Black);
        display.set_selection_color(Color::from_rgb(173, 216, 230));
        display.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
        display.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
    }
    display.redraw();
}
