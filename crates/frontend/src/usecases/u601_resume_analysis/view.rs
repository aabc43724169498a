//! Resume Analysis - page controller
//!
//! Owns the session (file, in-flight flag, last result) and is the only
//! place that talks to the gateway.

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_resume_analysis::{ResumeAnalysis, SubmitRejection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use super::file_selector::PdfUploader;
use super::job_description::JobDescriptionInput;
use super::view_model::{PickedFile, ResumeAnalysisVm};
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;

#[component]
pub fn ResumeAnalysisPage() -> impl IntoView {
    let vm = ResumeAnalysisVm::new();
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let handle_file_select = Callback::new(move |file: Option<PickedFile>| vm.select_file(file));
    let handle_text_change = Callback::new(move |text: String| vm.edit_text(&text));

    let handle_analyze = Callback::new(move |job_description: String| {
        // Повторная проверка: кнопка может быть активна в устаревшем состоянии
        let attempt = vm
            .session
            .try_update(|session| session.begin_submission(&job_description));

        let submission = match attempt {
            Some(Ok(submission)) => submission,
            Some(Err(SubmitRejection::Precondition(reason))) => {
                log::warn!("Analysis not started: {}", reason);
                notifications.error("Error", "Please upload a PDF and enter job description.");
                return;
            }
            Some(Err(SubmitRejection::InFlight)) => {
                notifications.info(
                    "Analysis in progress",
                    "Please wait for the current analysis to finish.",
                );
                return;
            }
            None => return,
        };

        notifications.info(
            "Analysis Started",
            &format!("Analyzing {}...", submission.file.meta.name),
        );
        log::info!(
            "Submitting {} ({}), job description: {} chars",
            submission.file.meta.name,
            submission.file.meta.display_size(),
            submission.job_description.chars().count()
        );

        spawn_local(async move {
            match api::analyze(&submission).await {
                Ok(result) => {
                    log::info!("Analysis received");
                    vm.session.update(|session| session.complete_success(result));
                }
                Err(e) => {
                    log::error!("Analysis request failed: {}", e);
                    vm.session.update(|session| session.complete_failure());
                    notifications.error("Error", "Analysis failed. Try again later.");
                }
            }
        });
    });

    view! {
        <div
            id="u601_resume_analysis--usecase"
            data-phase=move || vm.phase_name()
            style="min-height: 100vh;"
        >
            <div style="border-bottom: 1px solid var(--colorNeutralStroke2);">
                <div style="max-width: 1280px; margin: 0 auto; padding: 24px;">
                    <h1 style="font-size: 30px; font-weight: bold; margin-bottom: 8px;">
                        {ResumeAnalysis::display_name()}
                    </h1>
                    <p style="color: var(--colorNeutralForeground3);">
                        {ResumeAnalysis::description()}
                    </p>
                </div>
            </div>

            <div style="max-width: 1280px; margin: 0 auto; padding: 32px 24px;">
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 32px;">
                    <Card>
                        <h3 style="display: flex; align-items: center; gap: 8px; margin-bottom: 16px;">
                            {icon("file-text")}
                            "Resume Upload"
                        </h3>
                        <PdfUploader on_file_select=handle_file_select />
                    </Card>

                    <Card>
                        <h3 style="display: flex; align-items: center; gap: 8px; margin-bottom: 16px;">
                            {icon("target")}
                            "Job Description"
                        </h3>
                        <JobDescriptionInput
                            has_file=Signal::derive(move || vm.has_file())
                            in_flight=Signal::derive(move || vm.is_in_flight())
                            on_text_change=handle_text_change
                            on_analyze=handle_analyze
                        />
                    </Card>
                </div>

                {move || vm.reasoning().map(|reasoning| view! {
                    <div class="analysis-result" style="margin-top: 32px;">
                        <Card>
                            <h2 style="font-size: 20px; font-weight: 600;">"🧾 Analysis Summary"</h2>
                            <p style="white-space: pre-line;">{reasoning}</p>
                        </Card>
                    </div>
                })}
            </div>
        </div>
    }
}
