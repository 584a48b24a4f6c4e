use crate::web::router::Link;
use leptos::prelude::*;
use yijing::AppRoute;

struct Feature {
    title: &'static str,
    description: &'static str,
    route: AppRoute,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "易经占卜",
        description: "基于易经原理的智能占卜系统，为您提供准确的预测和指导。",
        route: AppRoute::Divination,
    },
    Feature {
        title: "运势分析",
        description: "全面的运势分析，包括事业、感情、财运等多个维度的预测。",
        route: AppRoute::Fortune,
    },
    Feature {
        title: "个性化服务",
        description: "根据您的个人信息和历史记录，提供更准确的占卜和分析服务。",
        route: AppRoute::Profile,
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let cards = FEATURES
        .iter()
        .map(|f| {
            view! {
                <Link route=f.route class="card bg-base-100 shadow hover:shadow-lg">
                    <div class="card-body items-center text-center">
                        <h3 class="card-title">{f.title}</h3>
                        <p>{f.description}</p>
                    </div>
                </Link>
            }
        })
        .collect_view();

    view! {
        <div>
            <h2 class="text-2xl font-bold">"欢迎使用易经占卜系统"</h2>
            <p class="mt-2 text-base-content/70">
                "易经占卜系统是一个基于古老易经智慧，结合现代技术的智能预测平台。"
                "我们致力于为您提供准确、专业的占卜服务和运势分析。"
            </p>
            <div class="grid gap-6 mt-8 sm:grid-cols-2 md:grid-cols-3">{cards}</div>
        </div>
    }
}
