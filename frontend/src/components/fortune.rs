use crate::auth::use_auth;
use crate::bridge::{bind, run, use_page};
use crate::components::status::{ErrorAlert, FormError, Spinner};
use leptos::prelude::*;
use yijing::pages;
use yijing::view::{
    Paginator, Render, TagColor, TrendView, period_tag, score_cells, total_label,
    trend_view,
};
use yijing_shared::{FortuneAnalysis, FortuneRecord};

fn tag_class(color: TagColor) -> &'static str {
    match color {
        TagColor::Blue => "badge badge-info",
        TagColor::Green => "badge badge-success",
        TagColor::Purple => "badge badge-secondary",
    }
}

#[component]
fn Statistics(analysis: Option<FortuneAnalysis>) -> impl IntoView {
    let stats = analysis.map(|a| a.statistics).unwrap_or_default();
    let cells = score_cells(&stats)
        .into_iter()
        .map(|cell| {
            view! {
                <div class="stat">
                    <div class="stat-title">{cell.title}</div>
                    <div class="stat-value text-primary">{cell.display}</div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="stats stats-vertical lg:stats-horizontal shadow w-full">{cells}</div> }
}

#[component]
fn Trends(analysis: Option<FortuneAnalysis>) -> impl IntoView {
    let points = analysis.map(|a| a.trends).unwrap_or_default();
    let rendered = match trend_view(&points) {
        TrendView::Placeholder(text) => {
            view! { <p class="text-center text-base-content/60 py-8">{text}</p> }.into_any()
        }
        TrendView::Series(series) => series
            .into_iter()
            .map(|(name, points)| {
                let rows = points
                    .into_iter()
                    .map(|p| view! { <tr><td>{p.date.clone()}</td><td>{p.value}</td></tr> })
                    .collect_view();
                view! {
                    <div class="mb-4">
                        <h4 class="font-semibold">{name.to_string()}</h4>
                        <table class="table table-sm">
                            <thead><tr><th>"日期"</th><th>"指数"</th></tr></thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    };
    rendered
}

#[component]
fn RecordsTable(records: Vec<FortuneRecord>, pager: RwSignal<Paginator>) -> impl IntoView {
    let total = records.len();
    let rows = pager.with(|p| {
        p.slice(&records)
            .iter()
            .map(|r| {
                let (label, color) = period_tag(&r.period_type);
                view! {
                    <tr>
                        <td><span class=tag_class(color)>{label}</span></td>
                        <td>{format!("{} 至 {}", r.start_date, r.end_date)}</td>
                        <td>{r.content.clone()}</td>
                        <td>{r.created_at.clone()}</td>
                    </tr>
                }
            })
            .collect_view()
    });
    let pages = pager.with(|p| p.page_count(total));
    let buttons = (1..=pages)
        .map(|n| {
            let class = if pager.with(|p| p.page() == n) {
                "join-item btn btn-sm btn-active"
            } else {
                "join-item btn btn-sm"
            };
            view! {
                <button
                    class=class
                    on:click=move |_| pager.update(|p| p.go_to(n, total))
                >
                    {n}
                </button>
            }
        })
        .collect_view();

    view! {
        <table class="table">
            <thead>
                <tr><th>"周期"</th><th>"日期范围"</th><th>"分析内容"</th><th>"创建时间"</th></tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        <div class="flex items-center justify-between mt-4">
            <span class="text-sm">{total_label(total)}</span>
            <div class="join">{buttons}</div>
        </div>
    }
}

#[component]
pub fn FortunePage() -> impl IntoView {
    let auth = use_auth();
    let page = use_page(pages::FortunePage::default(), pages::FortunePage::dispose);
    let analysis = page.with_value(|p| bind(p.analysis()));
    let records = page.with_value(|p| bind(p.records()));
    let pager = RwSignal::new(Paginator::default());

    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let (local_error, set_local_error) = signal(Option::<String>::None);

    if let Some(pending) = page.with_value(|p| p.mount(&auth.api())) {
        run(pending);
    }

    let on_analyze = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_local_error.set(None);
        let api = auth.api();
        match page.with_value(|p| p.analyze_text(&api, &start.get(), &end.get())) {
            Ok(pending) => {
                pager.update(|p| p.go_to(1, 0));
                run(pending);
            }
            Err(err) => set_local_error.set(Some(err.to_string())),
        }
    };

    let retry_analysis = Callback::new(move |_| {
        if let Some(pending) = page.try_with_value(|p| p.analysis().retry()).flatten() {
            run(pending);
        }
    });
    let refresh_records = Callback::new(move |_| {
        let api = auth.api();
        if let Some(pending) = page.try_with_value(|p| p.refresh_records(&api)) {
            run(pending);
        }
    });

    let analysis_view = move || {
        let s = analysis.get();
        let rendered = match s.render() {
            Render::Failed { message, stale } => view! {
                <ErrorAlert message=message.to_string() on_retry=retry_analysis />
                <Statistics analysis=stale.cloned() />
                <Trends analysis=stale.cloned() />
            }
            .into_any(),
            Render::Busy { stale } => view! {
                <Spinner />
                <Statistics analysis=stale.cloned() />
                <Trends analysis=stale.cloned() />
            }
            .into_any(),
            Render::Ready(data) => view! {
                <Statistics analysis=Some(data.clone()) />
                <Trends analysis=Some(data.clone()) />
            }
            .into_any(),
            Render::Idle => view! {
                <Statistics analysis=None />
                <Trends analysis=None />
            }
            .into_any(),
        };
        rendered
    };

    let records_view = move || {
        // 翻页时整表重绘
        pager.track();
        let s = records.get();
        let rendered = match s.render() {
            Render::Idle => ().into_any(),
            Render::Busy { .. } => view! { <Spinner /> }.into_any(),
            Render::Failed { message, stale } => view! {
                <ErrorAlert message=message.to_string() on_retry=refresh_records />
                {stale.cloned().map(|records| view! { <RecordsTable records pager /> })}
            }
            .into_any(),
            Render::Ready(list) => view! { <RecordsTable records=list.clone() pager /> }.into_any(),
        };
        rendered
    };

    view! {
        <div class="flex flex-col gap-6">
            <h2 class="text-2xl font-bold">"运势分析"</h2>
            <form class="flex flex-wrap items-end gap-4" on:submit=on_analyze>
                <label class="form-control">
                    <span class="label label-text">"开始日期"</span>
                    <input
                        type="date"
                        class="input input-bordered"
                        on:input=move |ev| start.set(event_target_value(&ev))
                        prop:value=start
                    />
                </label>
                <label class="form-control">
                    <span class="label label-text">"结束日期"</span>
                    <input
                        type="date"
                        class="input input-bordered"
                        on:input=move |ev| end.set(event_target_value(&ev))
                        prop:value=end
                    />
                </label>
                <button class="btn btn-primary" disabled=move || analysis.with(|s| s.is_loading())>
                    "分析运势"
                </button>
            </form>
            <FormError message=local_error />
            {analysis_view}
            <div class="flex items-center justify-between">
                <h3 class="text-xl font-semibold">"历史分析记录"</h3>
                <button class="btn btn-sm" on:click=move |_| refresh_records.run(())>"刷新"</button>
            </div>
            {records_view}
        </div>
    }
}
