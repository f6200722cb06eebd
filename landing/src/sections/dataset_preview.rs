//! Sample dataset table with the CSV download button.

use leptos::prelude::*;

use super::SectionId;
use crate::actions::{BrowserHost, download_sample};
use crate::content::{DATASET_RECORDS, SAMPLE_COLUMNS, SAMPLE_ROWS, SampleRow};
use crate::icons::{ICON_DOWNLOAD_SIMPLE, ICON_FILE_TEXT, Icon};

#[component]
pub fn DatasetPreview() -> impl IntoView {
    let on_download = move |_| download_sample(&BrowserHost);
    let footnote = format!(
        "* Complete dataset: Monthly vehicle sales from 2002 to 2024 ({} records)",
        DATASET_RECORDS
    );

    view! {
        <section class="section band-dark" data-section={SectionId::DatasetPreview.as_str()}>
            <div class="container container-narrow">
                <div class="section-header">
                    <div class="icon-disc accent-teal">
                        <Icon path=ICON_FILE_TEXT size="32" />
                    </div>
                    <h2 class="section-title">"Sample Dataset"</h2>
                    <p class="section-description">
                        "See how your historical data should be structured for optimal forecasting results"
                    </p>
                </div>

                <div class="panel">
                    <div class="table-scroll">
                        <table class="sample-table">
                            <thead>
                                <tr>
                                    {SAMPLE_COLUMNS.into_iter().map(|(label, accent)| view! {
                                        <th class={accent.with("column-heading")}>{label}</th>
                                    }).collect::<Vec<_>>()}
                                </tr>
                            </thead>
                            <tbody>
                                {SAMPLE_ROWS.into_iter().enumerate().map(|(index, row)| view! {
                                    <SampleTableRow index=index row=row />
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    </div>

                    <div class="panel-footer">
                        <p class="footnote">{footnote}</p>
                        <button class="btn btn-small" on:click=on_download>
                            <Icon path=ICON_DOWNLOAD_SIMPLE size="16" />
                            "Download Sample CSV"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SampleTableRow(index: usize, row: SampleRow) -> impl IntoView {
    let class = if row.is_elided() { "sample-row muted" } else { "sample-row" };

    view! {
        <tr class=class data-row={index.to_string()}>
            <td class="cell-strong">{row.year}</td>
            <td>{row.month}</td>
            <td>{row.new_sales}</td>
            <td>{row.used_sales}</td>
        </tr>
    }
}
