use fltk::{
    app::Sender,
    browser::HoldBrowser,
    button::Button,
    enums::{Align, CallbackTrigger, Color, Event, FrameType},
    frame::Frame,
    group::Flex,
    input::{Input, MultilineInput},
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor},
    window::Window,
};

use crate::app::domain::Message;

pub const SIDEBAR_WIDTH: i32 = 220;
pub const PANEL_WIDTH: i32 = 380;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub banner_frame: Frame,
    pub file_browser: HoldBrowser,
    pub path_input: Input,
    pub current_file_label: Frame,
    pub text_editor: TextEditor,
    pub preview: HelpView,
    pub prompt_input: MultilineInput,
    pub spec_display: TextDisplay,
    pub task_browser: HoldBrowser,
    pub header_frames: Vec<Frame>,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1280, 800, "SpecDeck");
    wind.set_xclass("SpecDeck");

    let mut flex = Flex::new(0, 0, 1280, 800, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Error banner (initially hidden); clicking it dismisses it
    let mut banner_frame = Frame::default().with_size(0, 0);
    banner_frame.set_frame(FrameType::FlatBox);
    banner_frame.set_color(Color::from_rgb(255, 250, 205));
    banner_frame.set_label_color(Color::Black);
    banner_frame.set_label_size(13);
    banner_frame.hide();
    flex.fixed(&banner_frame, 0);
    banner_frame.handle({
        let s = *sender;
        move |_, ev| {
            if ev == Event::Push {
                s.send(Message::DismissBanner);
                true
            } else {
                false
            }
        }
    });

    let mut content = Flex::new(0, 0, 1280, 770, None);
    content.set_type(fltk::group::FlexType::Row);

    // Left: workspace file list plus the create-file input
    let mut left = Flex::new(0, 0, SIDEBAR_WIDTH, 770, None);
    left.set_type(fltk::group::FlexType::Column);

    let files_header = header_frame("Workspace Files");
    left.fixed(&files_header, 24);

    let mut file_browser = HoldBrowser::new(0, 0, 0, 0, "");
    file_browser.set_callback({
        let s = *sender;
        move |b| {
            let line = b.value();
            if line > 0
                && let Some(path) = b.text(line)
            {
                s.send(Message::OpenFile(path));
            }
        }
    });

    let mut create_row = Flex::new(0, 0, 0, 28, None);
    create_row.set_type(fltk::group::FlexType::Row);
    let mut path_input = Input::new(0, 0, 0, 0, "");
    path_input.set_tooltip("New file path, e.g. js/app.js");
    path_input.set_trigger(CallbackTrigger::EnterKey);
    path_input.set_callback({
        let s = *sender;
        move |_| s.send(Message::CreateFile)
    });
    let mut add_button = Button::new(0, 0, 50, 0, "Add");
    add_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::CreateFile)
    });
    create_row.fixed(&add_button, 50);
    create_row.end();
    left.fixed(&create_row, 28);

    left.end();
    content.fixed(&left, SIDEBAR_WIDTH);

    // Center: open-file label plus the editor
    let mut center = Flex::new(0, 0, 0, 770, None);
    center.set_type(fltk::group::FlexType::Column);

    let mut current_file_label = Frame::new(0, 0, 0, 24, "(no file)");
    current_file_label.set_align(Align::Left | Align::Inside);
    current_file_label.set_label_size(13);
    center.fixed(&current_file_label, 24);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());

    // Line number styling (set once)
    text_editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
    text_editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));

    center.end();

    // Right: preview on top, planner below
    let mut right = Flex::new(0, 0, PANEL_WIDTH, 770, None);
    right.set_type(fltk::group::FlexType::Column);

    let preview_header = header_frame("Preview");
    right.fixed(&preview_header, 24);

    let mut preview = HelpView::new(0, 0, 0, 0, "");
    preview.set_value("<p>No index.html yet</p>");

    let planner_header = header_frame("Planner");
    right.fixed(&planner_header, 24);

    let mut prompt_input = MultilineInput::new(0, 0, 0, 70, "");
    prompt_input.set_tooltip("Describe the app you want");
    prompt_input.set_wrap(true);
    right.fixed(&prompt_input, 70);

    let mut button_row = Flex::new(0, 0, 0, 28, None);
    button_row.set_type(fltk::group::FlexType::Row);
    let mut generate_button = Button::new(0, 0, 0, 0, "Generate Spec");
    generate_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::GenerateSpec)
    });
    let mut derive_button = Button::new(0, 0, 0, 0, "Derive Tasks");
    derive_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::DeriveTasks)
    });
    let mut apply_button = Button::new(0, 0, 0, 0, "Apply Next");
    apply_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::ApplyTask)
    });
    button_row.end();
    right.fixed(&button_row, 28);

    let mut spec_display = TextDisplay::new(0, 0, 0, 0, "");
    spec_display.set_buffer(TextBuffer::default());

    let tasks_header = header_frame("Tasks");
    right.fixed(&tasks_header, 24);

    let task_browser = HoldBrowser::new(0, 0, 0, 0, "");

    right.end();
    content.fixed(&right, PANEL_WIDTH);

    content.end();
    flex.end();
    wind.resizable(&flex);

    MainWidgets {
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
        header_frames: vec![files_header, preview_header, planner_header, tasks_header],
    }
}

fn header_frame(label: &'static str) -> Frame {
    let mut frame = Frame::new(0, 0, 0, 24, label);
    frame.set_align(Align::Left | Align::Inside);
    frame.set_label_size(13);
    frame
}
