use models::services::NewService;

/// One of the fixed records inserted into an empty catalog.
#[derive(Debug, Clone, Copy)]
pub struct DefaultService {
    /// Stable slug stored in `seed_key`.
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub category: &'static str,
    pub image: &'static str,
}

impl DefaultService {
    pub fn to_new_service(&self) -> NewService {
        NewService {
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            category: self.category.to_string(),
            image: self.image.to_string(),
        }
    }
}

pub const DEFAULT_SERVICES: [DefaultService; 6] = [
    DefaultService {
        key: "product-development",
        title: "Product Development",
        description: "Build cutting-edge web and mobile applications with modern technologies. Our expert team delivers scalable, user-centric solutions.",
        icon: "Code",
        features: &["Web Development", "Mobile Apps", "UI/UX Design", "Prototyping"],
        category: "development",
        image: "https://images.unsplash.com/photo-1591439657848-9f4b9ce436b9?crop=entropy&cs=srgb&fm=jpg&q=85",
    },
    DefaultService {
        key: "cloud-devops",
        title: "Cloud & DevOps",
        description: "Streamline your infrastructure with AWS, Azure, and GCP. Implement CI/CD pipelines for faster, reliable deployments.",
        icon: "Cloud",
        features: &["AWS/Azure/GCP", "CI/CD Pipelines", "Infrastructure as Code", "Container Orchestration"],
        category: "infrastructure",
        image: "https://images.unsplash.com/photo-1607799279861-4dd421887fb3?crop=entropy&cs=srgb&fm=jpg&q=85",
    },
    DefaultService {
        key: "data-ai",
        title: "Data & AI",
        description: "Unlock insights from your data with advanced analytics and machine learning. Transform data into actionable intelligence.",
        icon: "Database",
        features: &["Data Science", "Machine Learning", "Predictive Analytics", "Big Data Processing"],
        category: "data",
        image: "https://images.unsplash.com/photo-1665211097563-163d6be45d67?crop=entropy&cs=srgb&fm=jpg&q=85",
    },
    DefaultService {
        key: "automation-integration",
        title: "Automation & Integration",
        description: "Automate repetitive tasks and integrate systems seamlessly. Boost productivity with RPA and API automation.",
        icon: "Workflow",
        features: &["RPA Solutions", "API Integration", "Workflow Automation", "System Integration"],
        category: "automation",
        image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?crop=entropy&cs=srgb&fm=jpg&q=85",
    },
    DefaultService {
        key: "cybersecurity",
        title: "Cybersecurity",
        description: "Protect your business with comprehensive security solutions. From audits to monitoring, we keep your data safe.",
        icon: "Shield",
        features: &["Security Audits", "Compliance", "Threat Monitoring", "Penetration Testing"],
        category: "security",
        image: "https://images.unsplash.com/photo-1532102235608-dc8fc689c9ab?crop=entropy&cs=srgb&fm=jpg&q=85",
    },
    DefaultService {
        key: "it-consulting",
        title: "IT Consulting & Support",
        description: "Strategic technology consulting and managed services. We help you navigate digital transformation with confidence.",
        icon: "Users",
        features: &["Tech Strategy", "Managed Services", "24/7 Support", "Digital Transformation"],
        category: "consulting",
        image: "https://images.unsplash.com/photo-1650327034581-1711a15a5430?crop=entropy&cs=srgb&fm=jpg&q=85",
    },
];
