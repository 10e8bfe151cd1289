use desk_runtime::{DeskConfig, DeskProvider, DeskShell};
use leptos::*;
use platform_host_web::build_host_services;

#[component]
/// Desktop root wired to the host adapters selected for this build.
pub fn DeskApp(
    /// DOM contract shared with the mount step.
    #[prop(optional)]
    config: DeskConfig,
) -> impl IntoView {
    view! {
        <DeskProvider host_services=build_host_services() config>
            <DeskShell />
        </DeskProvider>
    }
}
