use crate::{
    flatten::{FieldDescriptor, flatten},
    form::FormStateStore,
    selection::{FieldSelectionController, RepairPolicy, SelectError, SelectionChange},
    translate::Translate,
};
use bulkedit_schema::node::FieldNode;
use serde::Serialize;

/// Translation key of the selector heading.
pub const HEADING_KEY: &str = "fields:selectFieldsToEdit";

///
/// SelectOption
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: FieldDescriptor,
}

///
/// FieldSelect
///
/// Multi-select view model over a schema. Options are flattened once at
/// construction and never recomputed, even if the translator changes.
///

#[derive(Clone, Debug)]
pub struct FieldSelect {
    heading: String,
    options: Vec<SelectOption>,
    controller: FieldSelectionController,
}

impl FieldSelect {
    #[must_use]
    pub fn new<T>(fields: &[FieldNode], translate: &T, policy: RepairPolicy) -> Self
    where
        T: Translate + ?Sized,
    {
        let options = flatten(fields, translate)
            .into_iter()
            .map(|descriptor| SelectOption {
                label: descriptor.label.clone(),
                value: descriptor,
            })
            .collect();

        Self {
            heading: translate.translate(HEADING_KEY),
            options,
            controller: FieldSelectionController::with_policy(policy),
        }
    }

    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    #[must_use]
    pub const fn controller(&self) -> &FieldSelectionController {
        &self.controller
    }

    #[must_use]
    pub fn selected(&self) -> &[FieldDescriptor] {
        self.controller.selected()
    }

    /// Presenter callback. `indices` refers to `options()`. An index past the
    /// end rejects the whole change; neither the selection nor `form` is
    /// touched.
    pub fn on_change<S>(
        &mut self,
        indices: Option<&[usize]>,
        form: &mut S,
    ) -> Result<SelectionChange, SelectError>
    where
        S: FormStateStore + ?Sized,
    {
        let selection = indices
            .map(|indices| {
                indices
                    .iter()
                    .map(|&i| self.option_value(i))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(self.controller.on_selection_change(selection, form))
    }

    fn option_value(&self, index: usize) -> Result<FieldDescriptor, SelectError> {
        self.options.get(index).map(|o| o.value.clone()).ok_or_else(|| {
            let err = SelectError::IndexOutOfRange {
                index,
                len: self.options.len(),
            };
            tracing::warn!(error = %err, "field selection rejected");

            err
        })
    }
}

///
/// TESTS
///
