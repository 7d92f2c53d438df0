use folio_protocol::{Project, ProjectCategory};

const PLACEHOLDER: &str = "/placeholder.svg?height=300&width=400";

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Data Visualization Dashboard",
        description: "Interactive dashboard for analyzing sales data with real-time updates and predictive analytics.",
        technologies: &["Python", "Plotly", "Pandas", "Streamlit"],
        category: ProjectCategory::Data,
        image: PLACEHOLDER,
        link: None,
        github: None,
    },
    Project {
        id: 2,
        title: "E-commerce Platform",
        description: "Full-stack e-commerce solution with payment integration and inventory management.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        category: ProjectCategory::Web,
        image: PLACEHOLDER,
        link: None,
        github: None,
    },
    Project {
        id: 3,
        title: "Machine Learning Model",
        description: "Predictive model for customer behavior analysis using advanced ML algorithms.",
        technologies: &["Python", "Scikit-learn", "TensorFlow", "Jupyter"],
        category: ProjectCategory::Ml,
        image: PLACEHOLDER,
        link: None,
        github: None,
    },
    Project {
        id: 4,
        title: "Portfolio Website",
        description: "Responsive portfolio website with modern design and smooth animations.",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Framer Motion"],
        category: ProjectCategory::Web,
        image: PLACEHOLDER,
        link: None,
        github: None,
    },
];
