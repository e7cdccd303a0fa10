use crate::alert::{Alerts, InlineBanners};
use crate::config::SectionConfig;
use crate::dom::NodeId;
use crate::error::{BellowsError, Result};
use crate::event::{Dispatch, DomEvent};
use crate::handlers::{FormSubmitHandler, RowAddHandler};
use crate::page::Page;
use crate::rows::{RowTemplate, RowTemplates};
use crate::status::{StatusExtractor, StatusMsg};
use crate::transport::Transport;
use crate::validate::{FormValidator, RequiredFields};
use std::sync::Arc;

/// One repeatable form section of a page, owning the handlers delegated from
/// its root element.
pub struct Section {
    config: SectionConfig,
    page: Arc<Page>,
    root: NodeId,
    rows: RowTemplates,
    row_add: RowAddHandler,
    form_submit: FormSubmitHandler,
}

pub struct SectionBuilder {
    page: Arc<Page>,
    config: SectionConfig,
    transport: Arc<dyn Transport>,
    rows: RowTemplates,
    validator: Arc<dyn FormValidator>,
    alerts: Arc<dyn Alerts>,
    status: Arc<dyn StatusExtractor>,
}

impl SectionBuilder {
    pub fn validator(mut self, validator: Arc<dyn FormValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn alerts(mut self, alerts: Arc<dyn Alerts>) -> Self {
        self.alerts = alerts;
        self
    }

    pub fn status(mut self, status: Arc<dyn StatusExtractor>) -> Self {
        self.status = status;
        self
    }

    pub fn row_template(mut self, base: impl Into<String>, template: Arc<dyn RowTemplate>) -> Self {
        self.rows.register(base, template);
        self
    }

    pub fn rows(mut self, rows: RowTemplates) -> Self {
        self.rows = rows;
        self
    }

    pub fn build(self) -> Result<Section> {
        let root = self
            .page
            .read(|doc| doc.get_by_id(&self.config.root_id))
            .ok_or_else(|| BellowsError::MissingRoot(self.config.root_id.clone()))?;

        tracing::debug!(
            "section #{} bound with {} row template(s)",
            self.config.root_id,
            self.rows.len()
        );

        Ok(Section {
            row_add: RowAddHandler::new(&self.config),
            form_submit: FormSubmitHandler::new(
                &self.config,
                self.validator,
                self.alerts,
                self.status,
                self.transport,
            ),
            config: self.config,
            page: self.page,
            root,
            rows: self.rows,
        })
    }
}

impl Section {
    pub fn builder(
        page: Arc<Page>,
        config: SectionConfig,
        transport: Arc<dyn Transport>,
    ) -> SectionBuilder {
        SectionBuilder {
            page,
            config,
            transport,
            rows: RowTemplates::new(),
            validator: Arc::new(RequiredFields::default()),
            alerts: Arc::new(InlineBanners::default()),
            status: Arc::new(StatusMsg),
        }
    }

    pub fn page(&self) -> &Arc<Page> {
        &self.page
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    pub fn rows(&self) -> &RowTemplates {
        &self.rows
    }

    pub fn is_in_flight(&self, form: NodeId) -> bool {
        self.form_submit.is_in_flight(form)
    }

    pub async fn dispatch(&self, event: DomEvent) -> Result<Dispatch> {
        match event {
            DomEvent::Click { target } => self.click(target),
            DomEvent::Submit { form } => self.submit(form).await,
        }
    }

    pub fn click(&self, target: NodeId) -> Result<Dispatch> {
        let mut doc = self.page.lock();
        let target = doc.check(target)?;
        if !doc.contains(self.root, target) {
            return Ok(Dispatch::unhandled());
        }
        if self
            .row_add
            .delegate_target(&doc, self.root, target)
            .is_none()
        {
            tracing::trace!("click on {target} not delegated");
            return Ok(Dispatch::unhandled());
        }

        let outcome = self.row_add.handle(&mut doc, &self.rows, target);
        Ok(Dispatch::prevented(outcome))
    }

    pub async fn submit(&self, form: NodeId) -> Result<Dispatch> {
        let delegated = self.page.read(|doc| -> Result<bool> {
            let form = doc.check(form)?;
            Ok(doc.contains(self.root, form) && self.form_submit.matches(doc, form))
        })?;
        if !delegated {
            tracing::trace!("submit of {form} not delegated");
            return Ok(Dispatch::unhandled());
        }

        let outcome = self.form_submit.handle(&self.page, self.root, form).await;
        Ok(Dispatch::prevented(outcome))
    }
}
