use crate::shared::mutation::MutationExecutor;
use crate::shared::service::ResourceService;
use contracts::domain::a002_expense::aggregate::{Expense, ExpenseDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SERVICE: ResourceService = ResourceService::new("expense");

/// ViewModel for the expense details form
#[derive(Clone)]
pub struct ExpenseDetailsViewModel {
    pub form: RwSignal<ExpenseDto>,
    pub error: RwSignal<Option<String>>,
}

impl ExpenseDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ExpenseDto::default()),
            error: RwSignal::new(None),
        }
    }

    /// Load form data from the server when editing an existing expense
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            match SERVICE.get::<Expense>(&existing_id).await {
                Ok(expense) => {
                    let dto = ExpenseDto {
                        id: Some(expense.base.id.as_string()),
                        code: Some(expense.base.code),
                        description: expense.base.description,
                        category: expense.category,
                        amount: expense.amount,
                        expense_date: expense.expense_date,
                        notes: expense.base.notes,
                    };
                    form.set(dto);
                }
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

    /// Validate locally, then create or update through the executor so the
    /// cached list and stats are refreshed on success.
    pub fn save(&self, executor: &MutationExecutor, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();

        if let Err(e) = dto.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }
        self.error.set(None);

        executor.execute(
            "guardar".into(),
            None,
            async move {
                match dto.id.clone() {
                    Some(id) => SERVICE.update::<_, Expense>(&id, &dto).await.map(|_| ()),
                    None => SERVICE.create::<_, Expense>(&dto).await.map(|_| ()),
                }
            },
            move || on_saved.run(()),
        );
    }
}
