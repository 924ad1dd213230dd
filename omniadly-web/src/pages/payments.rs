use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::format::{format_amount, format_date};
use shared::models::Payment;
use shared::table::CellValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{AdminClient, or_empty};
use crate::components::{Column, DataTable};

/// Columns of a payment table.
pub fn payment_columns(i18n_t: &dyn Fn(&str) -> String) -> Vec<Column<Payment>> {
    vec![
        Column::key("userId", i18n_t("payments.columns.user_id")).cell(|payment: &Payment| {
            html! {
                <div class="flex flex-col">
                    <span class="font-mono text-xs">{&payment.user_id}</span>
                    if let Some(email) = &payment.user_email {
                        <span class="text-xs text-base-content/60">{email}</span>
                    }
                </div>
            }
        }),
        Column::computed("amount", i18n_t("payments.columns.amount"), |payment: &Payment| {
            CellValue::from(payment.amount)
        })
        .cell(|payment: &Payment| html! { {format_amount(payment.amount)} }),
        Column::key("currency", i18n_t("payments.columns.currency")),
        Column::computed("status", i18n_t("payments.columns.status"), |payment: &Payment| {
            CellValue::from(payment.status.to_string())
        }),
        Column::key("createdAt", i18n_t("payments.columns.created_at"))
            .cell(|payment: &Payment| html! { {format_date(&payment.created_at)} }),
    ]
}

/// Every payment on the platform.
#[function_component(PaymentsPage)]
pub fn payments_page() -> Html {
    let (i18n, _) = use_translation();
    let payments = use_state(|| Rc::new(Vec::<Payment>::new()));
    let loading = use_state(|| true);

    {
        let payments = payments.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let loaded = or_empty(AdminClient::shared().payments().await, "payments");
                payments.set(Rc::new(loaded));
                loading.set(false);
            });
            || ()
        });
    }

    let columns = Rc::new(payment_columns(&|key| i18n.t(key)));

    html! {
        <div class="card bg-base-200 shadow-sm">
            <div class="card-body">
                <h2 class="card-title text-xl">{i18n.t("payments.title")}</h2>
                <p class="text-sm text-base-content/70">{i18n.t("payments.description")}</p>
                <DataTable<Payment>
                    {columns}
                    data={(*payments).clone()}
                    loading={*loading}
                    empty_message={i18n.t("payments.empty")}
                />
            </div>
        </div>
    }
}
