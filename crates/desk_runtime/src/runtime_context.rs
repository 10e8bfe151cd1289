//! Runtime provider and context wiring for the pinned-file desktop.
//!
//! This module owns the reducer container, the runtime effect queue and host bootstrap wiring.
//! UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    config::DeskConfig,
    effect_executor,
    host::DeskHostContext,
    model::DeskState,
    reducer::{reduce_desk, DeskAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DeskAction`] values.
pub struct DeskRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DeskHostContext>,
    /// DOM contract with the host page.
    pub config: StoredValue<DeskConfig>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DeskState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DeskAction>,
}

impl DeskRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DeskAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DeskRuntimeContext`] to descendant components and boots the pinned list.
pub fn DeskProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    /// DOM contract with the host page.
    #[prop(optional)]
    config: DeskConfig,
    children: Children,
) -> impl IntoView {
    let host = store_value(DeskHostContext::new(host_services));
    let config = store_value(config);
    let state = create_rw_signal(DeskState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DeskAction| {
        let mut desk = state.get_untracked();
        let previous = desk.clone();

        match reduce_desk(&mut desk, action) {
            Ok(new_effects) => {
                if desk != previous {
                    state.set(desk);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desk reducer error: {err}"),
        }
    });

    let runtime = DeskRuntimeContext {
        host,
        config,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);
    host.get_value().install_boot_hydration(dispatch);

    children().into_view()
}

/// Returns the current [`DeskRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DeskProvider`].
pub fn use_desk_runtime() -> DeskRuntimeContext {
    use_context::<DeskRuntimeContext>().expect("DeskRuntimeContext not provided")
}
