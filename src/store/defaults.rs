use crate::models::category::ServiceCategory;
use crate::models::service::Service;

/// The catalog every fresh data directory starts from. Also what `reset`
/// restores and what a corrupt store falls back to.
pub fn default_services() -> Vec<Service> {
    vec![
        Service {
            id: "1".into(),
            title: "Custom Software Development".into(),
            title_ar: Some("تطوير البرمجيات المخصصة".into()),
            description: "We build scalable, robust, and secure custom software solutions tailored to your unique business requirements using cutting-edge technologies.".into(),
            description_ar: Some("نقوم ببناء حلول برمجية قابلة للتطوير وقوية وآمنة مخصصة لمتطلبات عملك الفريدة باستخدام أحدث التقنيات.".into()),
            category: ServiceCategory::Development.as_str().into(),
            icon: "Code".into(),
            created_at: Some(1_704_067_200_000),
            slug: Some("custom-software-development".into()),
        },
        Service {
            id: "2".into(),
            title: "Cloud Infrastructure Migration".into(),
            title_ar: Some("ترحيل البنية التحتية السحابية".into()),
            description: "Seamlessly migrate your legacy systems to the cloud. We specialize in AWS, Azure, and Google Cloud Platform architectural design and implementation.".into(),
            description_ar: Some("قم بترحيل أنظمتك القديمة بسلاسة إلى السحابة. نحن متخصصون في التصميم والتنفيذ المعماري لـ AWS و Azure و Google Cloud Platform.".into()),
            category: ServiceCategory::Cloud.as_str().into(),
            icon: "Cloud".into(),
            created_at: Some(1_704_153_600_000),
            slug: Some("cloud-infrastructure-migration".into()),
        },
        Service {
            id: "3".into(),
            title: "Cybersecurity Audit".into(),
            title_ar: Some("تدقيق الأمن السيبراني".into()),
            description: "Protect your digital assets with our comprehensive security audits. We identify vulnerabilities and implement enterprise-grade defense mechanisms.".into(),
            description_ar: Some("احمِ أصولك الرقمية من خلال تدقيقات الأمان الشاملة التي نقدمها. نحدد الثغرات ونطبق آليات دفاع على مستوى المؤسسات.".into()),
            category: ServiceCategory::Security.as_str().into(),
            icon: "Shield".into(),
            created_at: Some(1_704_240_000_000),
            slug: Some("cybersecurity-audit".into()),
        },
        Service {
            id: "4".into(),
            title: "Mobile App Development".into(),
            title_ar: Some("تطوير تطبيقات الهاتف المحمول".into()),
            description: "Engage your customers on the go. We create intuitive, high-performance native and cross-platform mobile applications for iOS and Android.".into(),
            description_ar: Some("تفاعل مع عملائك أثناء التنقل. نقوم بإنشاء تطبيقات جوال أصلية وعبر المنصات بديهية وعالية الأداء لنظامي iOS و Android.".into()),
            category: ServiceCategory::Development.as_str().into(),
            icon: "Smartphone".into(),
            created_at: Some(1_704_326_400_000),
            slug: Some("mobile-app-development".into()),
        },
        Service {
            id: "5".into(),
            title: "Data Analytics & BI".into(),
            title_ar: Some("تحليلات البيانات وذكاء الأعمال".into()),
            description: "Transform raw data into actionable insights. Our data scientists utilize advanced machine learning models to forecast trends and optimize operations.".into(),
            description_ar: Some("تحويل البيانات الخام إلى رؤى قابلة للتنفيذ. يستخدم علماء البيانات لدينا نماذج تعلم آلي متقدمة للتنبؤ بالاتجاهات وتحسين العمليات.".into()),
            category: ServiceCategory::Data.as_str().into(),
            icon: "Database".into(),
            created_at: Some(1_704_412_800_000),
            slug: Some("data-analytics-bi".into()),
        },
        Service {
            id: "6".into(),
            title: "UI/UX Design".into(),
            title_ar: Some("تصميم واجهة وتجربة المستخدم".into()),
            description: "Crafting digital experiences that delight. Our user-centric design approach ensures your products are not only beautiful but also intuitive and accessible.".into(),
            description_ar: Some("صياغة تجارب رقمية ممتعة. يضمن نهج التصميم الذي يركز على المستخدم أن منتجاتك ليست جميلة فحسب، بل بديهية وسهلة الوصول أيضًا.".into()),
            category: ServiceCategory::Design.as_str().into(),
            icon: "Layout".into(),
            created_at: Some(1_704_499_200_000),
            slug: Some("ui-ux-design".into()),
        },
        Service {
            id: "7".into(),
            title: "AI-Driven Business Automation".into(),
            title_ar: Some("أتمتة الأعمال المدعومة بالذكاء الاصطناعي".into()),
            description: "Revolutionize your workflow with intelligent automation. We leverage advanced machine learning algorithms and generative AI to streamline complex processes, reduce manual overhead, and unlock new operational efficiencies tailored to your industry needs.".into(),
            description_ar: Some("أحدث ثورة في سير عملك من خلال الأتمتة الذكية. نستفيد من خوارزميات التعلم الآلي المتقدمة والذكاء الاصطناعي التوليدي لتبسيط العمليات المعقدة، وتقليل العبء اليدوي، وفتح آفاق جديدة من الكفاءة التشغيلية المصممة خصيصًا لاحتياجات مجال عملك.".into()),
            category: "Artificial Intelligence".into(),
            icon: "Bot".into(),
            created_at: Some(1_704_585_600_000),
            slug: Some("ai-driven-business-automation".into()),
        },
    ]
}

/// Default credentials seeded on first run. Plain strings compared as-is;
/// kept for parity with the previous generation of the panel.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_EDITOR_PASSWORD: &str = "editor123";
