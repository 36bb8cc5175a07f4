//! Bundled content shown whenever the backend has nothing (or is unreachable).

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackService {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price_label: &'static str,
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackPortfolioItem {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub rating: f32,
    pub projects: &'static str,
}

pub fn fallback_services() -> Vec<FallbackService> {
    vec![
        FallbackService {
            title: "التصميم الجرافيكي",
            description: "شعارات، هوية بصرية، بوستات سوشيال ميديا، وجميع التصاميم الإبداعية",
            features: &[
                "تصميم شعارات احترافية",
                "بوستات سوشيال ميديا",
                "هوية بصرية متكاملة",
                "كروت شخصية وبروشورات",
            ],
            price_label: "من 150 جنيه",
            popular: true,
        },
        FallbackService {
            title: "الإعلانات الممولة",
            description: "إدارة حملات إعلانية على فيسبوك، إنستقرام، جوجل وجميع المنصات",
            features: &[
                "إعلانات فيسبوك وإنستقرام",
                "حملات جوجل آدز",
                "استهداف الجمهور المناسب",
                "تحليل النتائج والتحسين",
            ],
            price_label: "من 350 جنيه",
            popular: false,
        },
        FallbackService {
            title: "المواقع والمتاجر الإلكترونية",
            description: "تصميم مواقع تعريفية ومتاجر إلكترونية متكاملة مع بوابات الدفع",
            features: &[
                "مواقع تعريفية احترافية",
                "متاجر إلكترونية متكاملة",
                "تصميم متجاوب",
                "بوابات دفع آمنة",
            ],
            price_label: "من 1500 جنيه",
            popular: false,
        },
        FallbackService {
            title: "تحسين محركات البحث",
            description: "تحسين ظهور موقعك في نتائج البحث وزيادة الزوار المستهدفين",
            features: &["تحليل SEO شامل", "تحسين المحتوى", "بناء الروابط", "تقارير دورية"],
            price_label: "من 400 جنيه",
            popular: false,
        },
        FallbackService {
            title: "كتابة المحتوى والسير الذاتية",
            description: "كتابة محتوى تسويقي وتصميم سير ذاتية احترافية",
            features: &[
                "محتوى SEO",
                "سير ذاتية احترافية",
                "محتوى سوشيال ميديا",
                "كتابة إعلانية",
            ],
            price_label: "من 150 جنيه",
            popular: false,
        },
        FallbackService {
            title: "استشارات تسويقية",
            description: "استشارات مخصصة لتطوير استراتيجيات التسويق الرقمي",
            features: &[
                "تحليل المنافسين",
                "استراتيجية تسويقية",
                "خطة عمل رقمية",
                "متابعة الأداء",
            ],
            price_label: "من 300 جنيه",
            popular: false,
        },
    ]
}

pub fn fallback_portfolio() -> Vec<FallbackPortfolioItem> {
    vec![
        FallbackPortfolioItem {
            title: "مجموعة أعمال التصميم الجرافيكي",
            description: "شعارات، هويات بصرية، وتصاميم إبداعية لمختلف المشاريع",
            category: "تصميم جرافيكي",
            rating: 4.9,
            projects: "200+ مشروع",
        },
        FallbackPortfolioItem {
            title: "حملات إعلانية ناجحة",
            description: "نماذج من الحملات الإعلانية المدارة بنتائج استثنائية",
            category: "تسويق رقمي",
            rating: 4.8,
            projects: "150+ حملة",
        },
        FallbackPortfolioItem {
            title: "مواقع ومتاجر إلكترونية",
            description: "مواقع ومتاجر احترافية مع تصميم متجاوب وأداء عالي",
            category: "تطوير ويب",
            rating: 4.9,
            projects: "50+ موقع",
        },
    ]
}
