use leptos::{create_effect, logging, spawn_local, Callable, Callback};
use platform_host::{FileDetails, FileDetailsChannel};

use crate::{host::DeskHostContext, persistence, reducer::DeskAction};

pub(super) fn install_boot_hydration(host: DeskHostContext, dispatch: Callback<DeskAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let channel = host.file_channel();
            let subscribed = subscribe_file_details(channel.as_ref(), move |batch| {
                dispatch.call(DeskAction::FilesLoaded { batch });
            });
            if let Err(err) = subscribed {
                logging::error!("files_details subscription failed: {err}");
            }

            let pinned = persistence::load_pinned_files(host.prefs_store().as_ref()).await;
            logging::log!(
                "desk boot ({}): {} pinned file(s)",
                host.host_strategy_name(),
                pinned.len()
            );
            dispatch.call(DeskAction::PinnedFilesLoaded { pinned });
        });
    });
}

/// Routes decoded batches to `on_batch`; batches that failed to decode are logged and dropped so
/// the previous render stays.
pub(super) fn subscribe_file_details(
    channel: &dyn FileDetailsChannel,
    on_batch: impl Fn(Vec<FileDetails>) + 'static,
) -> Result<(), String> {
    channel.subscribe(Box::new(move |batch| match batch {
        Ok(batch) => on_batch(batch),
        Err(err) => logging::warn!("files_details ignored: {err}"),
    }))
}
