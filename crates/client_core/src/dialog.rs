use crate::record::Record;

/// The one dialog that can be open over a record list.
#[derive(Debug, Clone)]
pub enum Dialog<R: Record> {
    Closed,
    Creating {
        form: R::Form,
    },
    Viewing {
        record: R,
    },
    Editing {
        record: R,
        form: R::Form,
    },
    Deleting {
        record: R,
    },
}

impl<R: Record> Default for Dialog<R> {
    fn default() -> Self {
        Self::Closed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Closed,
    Creating,
    Viewing,
    Editing,
    Deleting,
}

impl<R: Record> Dialog<R> {
    pub fn kind(&self) -> DialogKind {
        match self {
            Self::Closed => DialogKind::Closed,
            Self::Creating { .. } => DialogKind::Creating,
            Self::Viewing { .. } => DialogKind::Viewing,
            Self::Editing { .. } => DialogKind::Editing,
            Self::Deleting { .. } => DialogKind::Deleting,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The record the dialog was opened for. May no longer be on the page.
    pub fn selected(&self) -> Option<&R> {
        match self {
            Self::Viewing { record } | Self::Editing { record, .. } | Self::Deleting { record } => {
                Some(record)
            }
            Self::Closed | Self::Creating { .. } => None,
        }
    }

    pub fn form(&self) -> Option<&R::Form> {
        match self {
            Self::Creating { form } | Self::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut R::Form> {
        match self {
            Self::Creating { form } | Self::Editing { form, .. } => Some(form),
            _ => None,
        }
    }
}
