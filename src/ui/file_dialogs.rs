use fltk::dialog::{FileDialogType, NativeFileChooser};

pub fn native_save_dialog(filter: &str, preset: &str) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_filter(filter);
    nfc.set_preset_file(preset);
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
