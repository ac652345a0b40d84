//! File inputs and multipart bodies.

use wasm_bindgen::JsCast;
use web_sys::{File, FileList, FormData, HtmlInputElement};

/// Files selected in the `<input type="file">` that fired `ev`
pub fn selected_files(ev: &web_sys::Event) -> Vec<File> {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .map(|list| files_of(&list))
        .unwrap_or_default()
}

/// Files dropped on a drop zone
pub fn dropped_files(ev: &web_sys::DragEvent) -> Vec<File> {
    ev.data_transfer()
        .and_then(|dt| dt.files())
        .map(|list| files_of(&list))
        .unwrap_or_default()
}

fn files_of(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Clears a file input so the same file can be selected again
pub fn reset_input(ev: &web_sys::Event) {
    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
        input.set_value("");
    }
}

/// Multipart body with every file under `field`
pub fn form_with_files(field: &str, files: &[File]) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create form: {:?}", e))?;
    for file in files {
        form.append_with_blob_and_filename(field, file, &file.name())
            .map_err(|e| format!("Failed to append file: {:?}", e))?;
    }
    Ok(form)
}

/// Appends text parts to a multipart body
pub fn append_fields(form: &FormData, fields: &[(&str, String)]) -> Result<(), String> {
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| format!("Failed to append {}: {:?}", name, e))?;
    }
    Ok(())
}
