//! Searchable, sortable, paginated table over an in-memory collection.
//!
//! All interaction state lives in one [`TableState`]; every render derives
//! the visible page from it with [`recompute`], so replacing `data` never
//! leaves stale rows or an out-of-range page on screen.

use std::fmt;
use std::rc::Rc;

use i18nrs::yew::use_translation;
use serde::Serialize;
use shared::table::{
    CellValue, ColumnDef, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, SortDirection, TableState,
    TableView, recompute,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Custom cell renderer.
pub type CellFn<T> = Rc<dyn Fn(&T) -> Html>;

/// A [`ColumnDef`] plus an optional custom cell.
pub struct Column<T> {
    pub def: ColumnDef<T>,
    cell: Option<CellFn<T>>,
}

impl<T> Column<T> {
    pub const fn new(def: ColumnDef<T>) -> Self {
        Self { def, cell: None }
    }

    /// Column reading the serialized field `key`.
    pub fn key(key: &str, header: impl Into<String>) -> Self {
        Self::new(ColumnDef::accessor_key(key, header))
    }

    /// Column with a computed value, used for filtering, sorting and the
    /// default cell text.
    pub fn computed<F>(id: &str, header: impl Into<String>, value: F) -> Self
    where
        F: Fn(&T) -> CellValue + 'static,
    {
        Self::new(ColumnDef::accessor_fn(id, header, value))
    }

    /// Display-only column, e.g. actions.
    pub fn display<F>(id: &str, header: impl Into<String>, cell: F) -> Self
    where
        F: Fn(&T) -> Html + 'static,
    {
        Self::new(ColumnDef::display(id, header)).cell(cell)
    }

    #[must_use]
    pub fn cell<F>(mut self, cell: F) -> Self
    where
        F: Fn(&T) -> Html + 'static,
    {
        self.cell = Some(Rc::new(cell));
        self
    }

    #[must_use]
    pub fn sortable(mut self, enabled: bool) -> Self {
        self.def = self.def.sortable(enabled);
        self
    }
}

impl<T: Serialize> Column<T> {
    fn render(&self, row: &T) -> Html {
        match &self.cell {
            Some(cell) => cell(row),
            None => html! { {self.def.value_of(row).to_text()} },
        }
    }
}

impl<T> AsRef<ColumnDef<T>> for Column<T> {
    fn as_ref(&self) -> &ColumnDef<T> {
        &self.def
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            def: self.def.clone(),
            cell: self.cell.clone(),
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_cell = match (&self.cell, &other.cell) {
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        };
        same_cell && self.def == other.def
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("def", &self.def)
            .field("custom_cell", &self.cell.is_some())
            .finish()
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<T: PartialEq + 'static> {
    pub columns: Rc<Vec<Column<T>>>,
    pub data: Rc<Vec<T>>,
    #[prop_or(DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
    #[prop_or(true)]
    pub show_search: bool,
    #[prop_or(true)]
    pub show_page_size: bool,
    #[prop_or(true)]
    pub show_pagination: bool,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub empty_message: Option<AttrValue>,
    #[prop_or_default]
    pub empty_description: Option<AttrValue>,
    #[prop_or_default]
    pub search_placeholder: Option<AttrValue>,
}

/// Icon shown in a sortable header.
pub const fn sort_icon(direction: Option<SortDirection>) -> IconId {
    match direction {
        Some(SortDirection::Asc) => IconId::HeroiconsOutlineChevronUp,
        Some(SortDirection::Desc) => IconId::HeroiconsOutlineChevronDown,
        None => IconId::HeroiconsOutlineChevronUpDown,
    }
}

/// "Showing X to Y of Z entries".
pub fn summary_text(view: &TableView, words: [&str; 4]) -> String {
    let [showing, to, of, entries] = words;
    format!(
        "{showing} {} {to} {} {of} {} {entries}",
        view.first_item, view.last_item, view.total_items
    )
}

/// `state` resized to a new `page_size` prop, or `None` when it already
/// matches.
pub fn resized(state: &TableState, page_size: usize) -> Option<TableState> {
    if state.pagination.page_size == page_size.max(1) {
        return None;
    }
    let mut next = state.clone();
    next.set_page_size(page_size);
    Some(next)
}

#[function_component(DataTable)]
pub fn data_table<T>(props: &DataTableProps<T>) -> Html
where
    T: PartialEq + Serialize + 'static,
{
    let (i18n, ..) = use_translation();
    let initial_page_size = props.page_size;
    let state = use_state(|| TableState::new(initial_page_size));

    {
        let state = state.clone();
        use_effect_with(props.page_size, move |page_size| {
            if let Some(next) = resized(&state, *page_size) {
                state.set(next);
            }
            || ()
        });
    }

    if props.loading {
        return html! { <TableSkeleton rows={props.page_size} /> };
    }

    let view = recompute(&state, props.columns.as_slice(), props.data.as_slice());

    let update = {
        let state = state.clone();
        move |change: &dyn Fn(&mut TableState)| {
            let mut next = (*state).clone();
            change(&mut next);
            state.set(next);
        }
    };

    let on_search = {
        let update = update.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let value = input.value();
            update(&|state: &mut TableState| state.set_global_filter(value.clone()));
        })
    };

    let on_page_size = {
        let update = update.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Ok(size) = select.value().parse::<usize>() {
                update(&|state: &mut TableState| state.set_page_size(size));
            }
        })
    };

    let navigate = |step: fn(&mut TableState, usize)| {
        let update = update.clone();
        let total_pages = view.total_pages;
        Callback::from(move |_: MouseEvent| {
            update(&|state: &mut TableState| step(state, total_pages));
        })
    };

    let header = props.columns.iter().map(|column| {
        let def = &column.def;
        if !def.can_sort() {
            return html! { <th key={def.id.clone()}>{&def.header}</th> };
        }
        let direction = state.sort_direction(&def.id);
        let onclick = {
            let update = update.clone();
            let def = def.clone();
            Callback::from(move |_: MouseEvent| {
                update(&|state: &mut TableState| {
                    state.toggle_column(&def);
                });
            })
        };
        html! {
            <th key={def.id.clone()}>
                <button class="flex items-center gap-1 hover:text-primary" {onclick}>
                    {&def.header}
                    <Icon icon_id={sort_icon(direction)} class="w-4 h-4 opacity-70" />
                </button>
            </th>
        }
    });

    let body = if view.is_empty() {
        let message = props
            .empty_message
            .clone()
            .unwrap_or_else(|| AttrValue::from(i18n.t("table.empty")));
        html! {
            <tr>
                <td colspan={props.columns.len().to_string()}>
                    <div class="flex flex-col items-center gap-2 py-10 text-base-content/70">
                        <Icon icon_id={IconId::HeroiconsOutlineInbox} class="w-10 h-10" />
                        <p class="font-medium">{message}</p>
                        if let Some(description) = props.empty_description.clone() {
                            <p class="text-sm">{description}</p>
                        }
                    </div>
                </td>
            </tr>
        }
    } else {
        view.rows
            .iter()
            .filter_map(|index| props.data.get(*index).map(|row| (*index, row)))
            .map(|(index, row)| {
                html! {
                    <tr key={index} class="hover">
                        { for props.columns.iter().map(|column| html! {
                            <td key={column.def.id.clone()}>{column.render(row)}</td>
                        }) }
                    </tr>
                }
            })
            .collect::<Html>()
    };

    let placeholder = props
        .search_placeholder
        .clone()
        .unwrap_or_else(|| AttrValue::from(i18n.t("table.search")));
    let page_size = state.page_size();

    html! {
        <div class="flex flex-col gap-4">
            if props.show_search || props.show_page_size {
                <div class="flex flex-wrap items-center justify-between gap-2">
                    if props.show_search {
                        <label class="input input-bordered flex items-center gap-2 w-full max-w-sm">
                            <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4 opacity-70" />
                            <input
                                type="text"
                                class="grow"
                                placeholder={placeholder}
                                value={state.global_filter.clone()}
                                oninput={on_search}
                            />
                        </label>
                    }
                    if props.show_page_size {
                        <label class="flex items-center gap-2 text-sm">
                            {i18n.t("table.rows_per_page")}
                            <select class="select select-bordered select-sm" onchange={on_page_size}>
                                { for PAGE_SIZE_OPTIONS.iter().map(|size| html! {
                                    <option value={size.to_string()} selected={*size == page_size}>
                                        {size.to_string()}
                                    </option>
                                }) }
                            </select>
                        </label>
                    }
                </div>
            }
            <div class="overflow-x-auto rounded-box border border-base-300">
                <table class="table table-zebra">
                    <thead><tr>{ for header }</tr></thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
            if props.show_pagination && !view.is_empty() {
                <div class="flex flex-wrap items-center justify-between gap-2 text-sm">
                    <span>
                        {summary_text(&view, [
                            &i18n.t("table.showing"),
                            &i18n.t("table.to"),
                            &i18n.t("table.of"),
                            &i18n.t("table.entries"),
                        ])}
                    </span>
                    <div class="join">
                        <button class="join-item btn btn-sm" disabled={!view.can_previous_page}
                            onclick={navigate(|state, _| state.first_page())}>
                            <Icon icon_id={IconId::HeroiconsOutlineChevronDoubleLeft} class="w-4 h-4" />
                        </button>
                        <button class="join-item btn btn-sm" disabled={!view.can_previous_page}
                            onclick={navigate(TableState::previous_page)}>
                            <Icon icon_id={IconId::HeroiconsOutlineChevronLeft} class="w-4 h-4" />
                        </button>
                        <span class="join-item btn btn-sm btn-disabled">
                            {format!("{} {} / {}", i18n.t("table.page"), view.current_page, view.total_pages)}
                        </span>
                        <button class="join-item btn btn-sm" disabled={!view.can_next_page}
                            onclick={navigate(TableState::next_page)}>
                            <Icon icon_id={IconId::HeroiconsOutlineChevronRight} class="w-4 h-4" />
                        </button>
                        <button class="join-item btn btn-sm" disabled={!view.can_next_page}
                            onclick={navigate(TableState::last_page)}>
                            <Icon icon_id={IconId::HeroiconsOutlineChevronDoubleRight} class="w-4 h-4" />
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq, Eq)]
pub struct TableSkeletonProps {
    pub rows: usize,
}

/// Placeholder shown while the rows are loading.
#[function_component(TableSkeleton)]
pub fn table_skeleton(props: &TableSkeletonProps) -> Html {
    html! {
        <div class="flex flex-col gap-3" aria-busy="true">
            <div class="skeleton h-10 w-full max-w-sm"></div>
            { for (0..props.rows.max(1)).map(|row| html! {
                <div key={row} class="skeleton h-8 w-full"></div>
            }) }
            <div class="skeleton h-8 w-1/3 self-end"></div>
        </div>
    }
}
