//! Resume Analysis - PDF file selector (drag & drop or file dialog)

use contracts::usecases::u601_resume_analysis::{first_pdf, SelectedFile};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use super::view_model::PickedFile;
use crate::shared::icons::icon;

fn picked_files(list: Option<web_sys::FileList>) -> Vec<PickedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(PickedFile::from_file)
        .collect()
}

/// Accepts exactly one PDF. Anything else is ignored without a message.
///
/// Every accepted change is reported through `on_file_select`,
/// removal reports `None`.
#[component]
pub fn PdfUploader(on_file_select: Callback<Option<PickedFile>>) -> impl IntoView {
    // Local copy for display only; the page owns the real selection
    let selected = RwSignal::new(Option::<SelectedFile>::None);
    let is_drag_over = RwSignal::new(false);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let accept = move |file: PickedFile| {
        selected.set(Some(file.meta.clone()));
        on_file_select.run(Some(file));
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        is_drag_over.set(false);

        let files = ev.data_transfer().and_then(|dt| dt.files());
        if let Some(file) = first_pdf(picked_files(files)) {
            accept(file);
        }
    };

    // Обработка выбора файла через диалог
    let handle_file_select = move |ev: web_sys::Event| {
        let first = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(PickedFile::from_file);

        if let Some(file) = first_pdf(first) {
            accept(file);
        }
    };

    let remove_file = move || {
        selected.set(None);
        on_file_select.run(None);
        // Сбрасываем input, иначе тот же файл не выбрать повторно
        if let Some(input) = file_input_ref.get() {
            input.set_value("");
        }
    };

    let open_file_dialog = move || {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="pdf-uploader" style="width: 100%;">
            <input
                node_ref=file_input_ref
                type="file"
                accept=".pdf"
                style="display: none;"
                on:change=handle_file_select
            />

            {move || match selected.get() {
                Some(file) => view! {
                    <div class="pdf-uploader__selected" style="border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 24px;">
                        <div style="display: flex; align-items: center; justify-content: space-between;">
                            <div style="display: flex; align-items: center; gap: 12px;">
                                <div class="pdf-uploader__file-icon">{icon("file-text")}</div>
                                <div>
                                    <p style="font-weight: 500;">{file.name.clone()}</p>
                                    <p style="font-size: 13px; color: var(--colorNeutralForeground3);">
                                        {file.display_size()}
                                    </p>
                                </div>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| remove_file()
                            >
                                {icon("x")}
                            </Button>
                        </div>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div
                        class="pdf-uploader__dropzone"
                        style=move || format!(
                            "border: 2px dashed {}; border-radius: 8px; padding: 32px; text-align: center; cursor: pointer;",
                            if is_drag_over.get() { "var(--colorBrandStroke1)" } else { "var(--colorNeutralStroke2)" }
                        )
                        on:dragover=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            is_drag_over.set(true);
                        }
                        on:dragleave=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            is_drag_over.set(false);
                        }
                        on:drop=handle_drop
                        on:click=move |_| open_file_dialog()
                    >
                        <div style="display: flex; flex-direction: column; align-items: center; gap: 16px;">
                            <div class="pdf-uploader__upload-icon">{icon("upload")}</div>
                            <div>
                                <p style="font-size: 18px; font-weight: 500; margin-bottom: 8px;">
                                    "Upload PDF Resume"
                                </p>
                                <p style="font-size: 13px; color: var(--colorNeutralForeground3); margin-bottom: 16px;">
                                    "Drag and drop your PDF file here, or click to browse"
                                </p>
                                <Button appearance=ButtonAppearance::Secondary size=ButtonSize::Small>
                                    "Choose File"
                                </Button>
                            </div>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
