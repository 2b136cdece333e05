use crate::collection;
use crate::errors::ValidationError;
use tracing::warn;

/// Whether the open form creates a new record or edits the one with this id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing(String),
}

/// An in-progress edit of one entity kind.
pub trait Draft: Clone + Default {
    type Record: collection::Record;

    /// Name shown in form titles, e.g. "Product".
    const ENTITY: &'static str;

    fn from_record(record: &Self::Record) -> Self;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Build the payload sent to the backend. Only called after `validate`.
    fn to_record(&self, id: String) -> Self::Record;
}

/// What a successful submit asks the backend to do.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<R> {
    Create(R),
    Update { id: String, record: R },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormSession<D> {
    pub mode: FormMode,
    pub draft: D,
    pub error: Option<String>,
}

impl<D: Draft> FormSession<D> {
    pub fn creating() -> Self {
        Self {
            mode: FormMode::Creating,
            draft: D::default(),
            error: None,
        }
    }

    pub fn editing(id: impl Into<String>, record: &D::Record) -> Self {
        Self {
            mode: FormMode::Editing(id.into()),
            draft: D::from_record(record),
            error: None,
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Editing(id) => Some(id),
            FormMode::Creating => None,
        }
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Creating => format!("Create {}", D::ENTITY),
            FormMode::Editing(_) => format!("Edit {}", D::ENTITY),
        }
    }

    pub fn submit_label(&self) -> String {
        match self.mode {
            FormMode::Creating => format!("Create {}", D::ENTITY),
            FormMode::Editing(_) => format!("Update {}", D::ENTITY),
        }
    }

    /// Validate the draft and turn it into a backend write.
    ///
    /// On rejection the message is stored on the session and nothing is
    /// returned for dispatch. New records get the next client-side id taken
    /// from `existing`.
    pub fn submit(
        &mut self,
        existing: &[D::Record],
    ) -> Result<Submission<D::Record>, ValidationError> {
        self.error = None;
        let result = self.draft.validate().and_then(|()| match &self.mode {
            FormMode::Editing(id) => Ok(Submission::Update {
                id: id.clone(),
                record: self.draft.to_record(id.clone()),
            }),
            FormMode::Creating => collection::next_identifier(existing)
                .map(|id| Submission::Create(self.draft.to_record(id))),
        });
        if let Err(err) = &result {
            warn!(entity = D::ENTITY, error = %err, "draft rejected");
            self.error = Some(err.to_string());
        }
        result
    }
}
