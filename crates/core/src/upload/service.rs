//! Uploader service implementation.

use std::sync::Arc;

use notedrop_shared::UploadConfig;
use tracing::{debug, warn};

use super::dispatch::Dispatcher;
use super::reconcile::reconcile;
use super::types::{Claim, PendingUpload, Reconciled, UploadReport};
use crate::editor::{Editor, Notice, Notifier, SharedEditor};
use crate::fingerprint::fingerprint;
use crate::intake::{EditorEvent, claim};
use crate::placeholder::Placeholder;
use crate::settings::{EffectiveConfig, Frontmatter};
use crate::storage::{LocalVault, ObjectStore};

/// Handles paste and drop events for one host.
pub struct Uploader<S: ObjectStore, V: LocalVault, N: Notifier> {
    settings: Arc<UploadConfig>,
    dispatcher: Arc<Dispatcher<S, V>>,
    notifier: Arc<N>,
}

impl<S, V, N> Uploader<S, V, N>
where
    S: ObjectStore + 'static,
    V: LocalVault + 'static,
    N: Notifier + 'static,
{
    /// Create a new uploader.
    #[must_use]
    pub fn new(
        settings: Arc<UploadConfig>,
        dispatcher: Arc<Dispatcher<S, V>>,
        notifier: Arc<N>,
    ) -> Self {
        Self {
            settings,
            dispatcher,
            notifier,
        }
    }

    /// Global settings the uploader resolves against.
    #[must_use]
    pub fn settings(&self) -> &UploadConfig {
        &self.settings
    }

    /// Offer a paste or drop event.
    ///
    /// A declined event leaves the note untouched. A claimed event has its
    /// placeholder inserted at the cursor before this returns; the upload
    /// and reconciliation then run on a spawned task, which notifies the user
    /// when done. Must be called from within a Tokio runtime.
    pub fn handle_event<E>(
        &self,
        editor: &SharedEditor<E>,
        event: EditorEvent,
        frontmatter: &Frontmatter,
    ) -> Claim
    where
        E: Editor + Send + 'static,
    {
        let config = EffectiveConfig::resolve(&self.settings, frontmatter);

        let request = match claim(event, &config) {
            Ok(request) => request,
            Err(reason) => {
                debug!(reason = %reason, "event declined");
                return Claim::Declined(reason);
            }
        };

        let key = fingerprint(&request.bytes, &request.original_name);
        let placeholder = Placeholder::for_key(&key);
        placeholder.insert(&mut *editor.lock());
        debug!(key = %key, kind = %request.kind, local = config.local_upload, "event claimed");

        let dispatcher = Arc::clone(&self.dispatcher);
        let notifier = Arc::clone(&self.notifier);
        let editor = Arc::clone(editor);
        let task_key = key.clone();
        let task_placeholder = placeholder.clone();

        let task = tokio::spawn(async move {
            let outcome = dispatcher.dispatch(&request, &task_key, &config).await;
            let result = reconcile(&mut *editor.lock(), &task_placeholder, outcome);

            match &result {
                Ok(Reconciled::Replaced { .. }) => {
                    notifier.notify(Notice::success(format!("Uploaded {task_key}")));
                }
                Ok(Reconciled::PlaceholderMissing) => {
                    warn!(key = %task_key, "placeholder not found, note left unchanged");
                    notifier.notify(Notice::success(format!("Uploaded {task_key}")));
                }
                Err(e) => notifier.notify(Notice::error(e.to_string())),
            }

            UploadReport {
                key: task_key,
                result,
            }
        });

        Claim::Claimed(PendingUpload::new(key, placeholder, task))
    }
}
