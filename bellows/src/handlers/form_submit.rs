use crate::alert::Alerts;
use crate::button::LoadingGuard;
use crate::config::SectionConfig;
use crate::dom::{Document, FormData, NodeId, Selector};
use crate::event::Outcome;
use crate::page::Page;
use crate::status::{StatusExtractor, SubmitFailure};
use crate::transport::Transport;
use crate::validate::FormValidator;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Validates and saves a section form in the background.
pub struct FormSubmitHandler {
    delegate: Selector,
    submit: Selector,
    success_message: String,
    guard_in_flight: bool,
    validator: Arc<dyn FormValidator>,
    alerts: Arc<dyn Alerts>,
    status: Arc<dyn StatusExtractor>,
    transport: Arc<dyn Transport>,
    in_flight: Mutex<HashSet<NodeId>>,
}

impl FormSubmitHandler {
    pub fn new(
        config: &SectionConfig,
        validator: Arc<dyn FormValidator>,
        alerts: Arc<dyn Alerts>,
        status: Arc<dyn StatusExtractor>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            delegate: Selector::form_named(&config.form_name),
            submit: Selector::Class(config.submit_class.clone()),
            success_message: config.success_message.clone(),
            guard_in_flight: config.guard_in_flight,
            validator,
            alerts,
            status,
            transport,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub fn matches(&self, doc: &Document, form: NodeId) -> bool {
        self.delegate.matches(doc, form)
    }

    pub fn is_in_flight(&self, form: NodeId) -> bool {
        self.forms().contains(&form)
    }

    pub async fn handle(&self, page: &Arc<Page>, root: NodeId, form: NodeId) -> Outcome {
        if !page.update(|doc| self.validator.is_valid(doc, form)) {
            tracing::info!("form {form} failed validation, not submitted");
            return Outcome::Invalid;
        }

        let Some(_flight) = self.begin(form) else {
            tracing::info!("form {form} already has a save in flight, submit ignored");
            return Outcome::Ignored;
        };

        let (action, body, buttons) = page.read(|doc| {
            (
                doc.attr(form, "action").unwrap_or_default().to_string(),
                FormData::collect(doc, form).to_urlencoded(),
                doc.query_all(form, &self.submit),
            )
        });

        let loading = LoadingGuard::engage(Arc::clone(page), buttons);
        page.update(|doc| self.alerts.reset(doc, root));

        let result = self.transport.post_form(&action, body).await;
        drop(loading);

        let failure = match result {
            Ok(resp) if resp.is_success() => {
                tracing::info!("saved form {form} to '{action}' ({})", resp.status);
                page.update(|doc| self.alerts.show_success(doc, form, &self.success_message));
                return Outcome::Saved {
                    status: resp.status,
                };
            }
            Ok(resp) => SubmitFailure::Status(resp),
            Err(e) => SubmitFailure::Transport(e),
        };

        let message = self.status.status_message(&failure);
        tracing::warn!("saving form {form} to '{action}' failed: {message}");
        page.update(|doc| {
            doc.scroll_to_top();
            self.alerts.show_permanent_error(doc, form, &message);
        });

        Outcome::Failed {
            status: failure.status(),
            message,
        }
    }

    fn forms(&self) -> std::sync::MutexGuard<'_, HashSet<NodeId>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, form: NodeId) -> Option<InFlight<'_>> {
        if !self.guard_in_flight {
            return Some(InFlight { handler: self, form: None });
        }
        if !self.forms().insert(form) {
            return None;
        }
        Some(InFlight {
            handler: self,
            form: Some(form),
        })
    }
}

/// Marks a form as saving until dropped.
struct InFlight<'a> {
    handler: &'a FormSubmitHandler,
    form: Option<NodeId>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(form) = self.form {
            self.handler.forms().remove(&form);
        }
    }
}
