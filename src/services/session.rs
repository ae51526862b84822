//! The coordinating context that owns all mutable session state.

use crate::domain::catalog::{CatalogState, display_list};
use crate::domain::image::ImagePayload;
use crate::domain::product::{NewProduct, Product};
use crate::dto::catalog::CatalogPage;
use crate::forms::product::AddProductForm;
use crate::repository::{CatalogReader, CatalogWriter};
use crate::services::catalog;
use crate::services::submission::{self, CREATE_FAILURE_MESSAGE, SubmissionStatus};

/// One operator session over the catalog.
///
/// Owns the catalog lifecycle, the append-only local additions, the form
/// draft, and the submission status; everything is discarded when the
/// session is dropped. State is mutated only at the two suspend points
/// (fetch settles, create settles) and on form edits, all behind `&mut
/// self`, so no two operations on one session can overlap.
pub struct CatalogSession<R> {
    repo: R,
    catalog: CatalogState,
    locals: Vec<Product>,
    form: AddProductForm,
    submission: SubmissionStatus,
}

impl<R> CatalogSession<R> {
    /// Starts a session in the loading phase with no local additions and an
    /// empty draft.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            catalog: CatalogState::Loading,
            locals: Vec::new(),
            form: AddProductForm::default(),
            submission: SubmissionStatus::idle(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    #[must_use]
    pub fn submission(&self) -> &SubmissionStatus {
        &self.submission
    }

    #[must_use]
    pub fn form(&self) -> &AddProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AddProductForm {
        &mut self.form
    }

    /// Records created in this session that the remote catalog does not
    /// reflect yet, in append order.
    #[must_use]
    pub fn local_additions(&self) -> &[Product] {
        &self.locals
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Remote records followed by local additions; the consistent list the
    /// renderer iterates.
    #[must_use]
    pub fn display_list(&self) -> Vec<&Product> {
        display_list(&self.catalog, &self.locals)
    }

    /// Render-ready view of the session: a loading line, an error line, or
    /// the merged table.
    #[must_use]
    pub fn page(&self) -> CatalogPage {
        catalog::catalog_page(&self.catalog, &self.locals)
    }
}

impl<R> CatalogSession<R>
where
    R: CatalogReader + CatalogWriter,
{
    /// Runs the one-shot catalog fetch and settles the catalog phase.
    ///
    /// Intended to be called exactly once, right after construction. A
    /// repeated call issues a fresh request and overwrites the previous
    /// outcome; nothing guards against it.
    pub async fn load_catalog(&mut self) -> &CatalogState {
        self.catalog = catalog::load_catalog(&self.repo).await;
        &self.catalog
    }

    /// Validates the draft and, when it passes, performs the single create
    /// request.
    ///
    /// On success the created record (service echo when present, sent
    /// payload otherwise, with the operator's preview image taking
    /// precedence) is appended to the local additions, the draft is cleared,
    /// and the status settles back at idle with a success message. On any
    /// failure the draft is preserved so the operator can correct and
    /// resubmit.
    pub async fn submit(&mut self) -> &SubmissionStatus {
        self.submission = SubmissionStatus::validating();
        let payload = match NewProduct::try_from(&self.form) {
            Ok(payload) => payload,
            Err(err) => {
                self.submission = SubmissionStatus::failed(err.to_string());
                return &self.submission;
            }
        };

        self.submission = SubmissionStatus::submitting();
        match submission::create_product(&self.repo, &payload).await {
            Ok(mut product) => {
                if let Some(preview) = self
                    .form
                    .image_preview
                    .as_deref()
                    .and_then(ImagePayload::from_text)
                {
                    product.image = Some(preview);
                }
                self.locals.push(product);
                self.form.clear();
                self.submission = SubmissionStatus::accepted();
            }
            Err(_) => {
                // Cause already logged; the operator gets one generic line.
                self.submission = SubmissionStatus::failed(CREATE_FAILURE_MESSAGE);
            }
        }
        &self.submission
    }
}
