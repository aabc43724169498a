use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::usecases::u601_resume_analysis::ResumeAnalysisPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toasts for the whole page
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <ResumeAnalysisPage />
            <NotificationHost />
        </ConfigProvider>
    }
}
