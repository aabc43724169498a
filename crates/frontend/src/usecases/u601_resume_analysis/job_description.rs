//! Resume Analysis - job description input and the "Run Analysis" trigger

use contracts::usecases::u601_resume_analysis::SubmitGate;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

const PLACEHOLDER: &str = "Paste the job description here...\n\nInclude key requirements, responsibilities, and qualifications you're looking for in a candidate.";

/// Owns the text; the file reference and the in-flight flag come from the page.
///
/// Every edit is reported through `on_text_change`. `on_analyze` receives
/// the raw text; the page re-checks everything before sending, this
/// component only gates the button.
#[component]
pub fn JobDescriptionInput(
    #[prop(into)] has_file: Signal<bool>,
    #[prop(into)] in_flight: Signal<bool>,
    on_text_change: Callback<String>,
    on_analyze: Callback<String>,
) -> impl IntoView {
    let job_description = RwSignal::new(String::new());

    Effect::new(move |_| {
        on_text_change.run(job_description.get());
    });

    let gate = Memo::new(move |_| {
        job_description.with(|text| SubmitGate::evaluate(has_file.get(), text, in_flight.get()))
    });

    let handle_analyze = move || {
        let text = job_description.get_untracked();
        if !text.trim().is_empty() {
            on_analyze.run(text);
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 16px;">
            <div style="display: flex; flex-direction: column; gap: 8px;">
                <label for="job-description" style="font-weight: 600; display: flex; align-items: center; gap: 8px;">
                    {icon("briefcase")}
                    "Job Description"
                </label>
                <Textarea
                    value=job_description
                    placeholder=PLACEHOLDER
                    attr:id="job-description"
                    attr:style="width: 100%; min-height: 300px; resize: none;"
                />
            </div>

            <div style="display: flex; flex-direction: column; gap: 12px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !gate.get().is_open())
                    on_click=move |_| handle_analyze()
                    attr:style="width: 100%;"
                >
                    {icon("play")}
                    " Run Analysis"
                </Button>

                {move || gate.get().hint().map(|hint| view! {
                    <p style="font-size: 13px; color: var(--colorNeutralForeground3); text-align: center;">
                        {hint}
                    </p>
                })}
            </div>
        </div>
    }
}
