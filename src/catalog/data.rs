//! The built-in course catalog.

use crate::entity::{Category, Course, Instructor, Level};

fn course(
    id: u32,
    title: &str,
    description: &str,
    category: Category,
    level: Level,
    duration: &str,
    price: u32,
    original_price: u32,
    rating: f32,
    students: u32,
    instructor_name: &str,
    instructor_title: &str,
    curriculum: &[&str],
    icon: &str,
) -> Course {
    Course {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category,
        level,
        duration: duration.to_string(),
        price,
        original_price,
        rating,
        students,
        instructor: Instructor {
            name: instructor_name.to_string(),
            title: instructor_title.to_string(),
        },
        curriculum: curriculum.iter().map(|s| s.to_string()).collect(),
        icon: icon.to_string(),
    }
}

/// The full catalog, in original order. Loaded once and never mutated.
pub fn builtin() -> Vec<Course> {
    vec![
        course(
            1,
            "Web Development Fundamentals",
            "Master HTML, CSS, and JavaScript to build modern websites from scratch. Learn responsive design and modern web development practices.",
            Category::Technology,
            Level::Beginner,
            "12 hours",
            99,
            199,
            4.8,
            2500,
            "Sarah Johnson",
            "Senior Web Developer at TechCorp",
            &[
                "HTML5 structure and semantics",
                "CSS3 styling and layouts",
                "JavaScript fundamentals",
                "Responsive design principles",
                "Modern development tools",
            ],
            "fas fa-code",
        ),
        course(
            2,
            "Machine Learning Basics",
            "Introduction to AI and machine learning concepts with Python implementation. Build your first ML models.",
            Category::Technology,
            Level::Intermediate,
            "16 hours",
            149,
            249,
            4.9,
            1800,
            "Michael Chen",
            "Data Scientist at DataFlow",
            &[
                "Python for ML",
                "Statistical concepts",
                "Supervised learning",
                "Unsupervised learning",
                "Model evaluation",
            ],
            "fas fa-robot",
        ),
        course(
            3,
            "UI/UX Design Mastery",
            "Create stunning user interfaces and exceptional user experiences with modern design tools and principles.",
            Category::Design,
            Level::Advanced,
            "14 hours",
            129,
            179,
            4.7,
            1200,
            "Emily Rodriguez",
            "Lead UX Designer at CreativeStudio",
            &[
                "Design principles",
                "User research methods",
                "Wireframing and prototyping",
                "Visual design fundamentals",
                "Usability testing",
            ],
            "fas fa-palette",
        ),
        course(
            4,
            "Digital Marketing Strategy",
            "Learn comprehensive digital marketing strategies including SEO, social media, and content marketing.",
            Category::Business,
            Level::Beginner,
            "10 hours",
            89,
            149,
            4.6,
            2100,
            "David Wilson",
            "Marketing Director at GrowthCo",
            &[
                "SEO fundamentals",
                "Social media marketing",
                "Content strategy",
                "Email marketing",
                "Analytics and reporting",
            ],
            "fas fa-bullhorn",
        ),
        course(
            5,
            "Python Programming Complete",
            "From basics to advanced Python programming. Build real-world applications and automate tasks.",
            Category::Technology,
            Level::Beginner,
            "20 hours",
            119,
            199,
            4.8,
            3200,
            "Alex Thompson",
            "Python Developer at CodeWorks",
            &[
                "Python syntax and basics",
                "Data structures",
                "Object-oriented programming",
                "File handling",
                "Web scraping and APIs",
            ],
            "fas fa-python",
        ),
        course(
            6,
            "Financial Analysis Fundamentals",
            "Master financial analysis, budgeting, and investment strategies for personal and business finance.",
            Category::Business,
            Level::Intermediate,
            "12 hours",
            109,
            169,
            4.7,
            1500,
            "Lisa Park",
            "Financial Analyst at FinancePro",
            &[
                "Financial statements analysis",
                "Budgeting techniques",
                "Investment strategies",
                "Risk management",
                "Financial modeling",
            ],
            "fas fa-chart-line",
        ),
        course(
            7,
            "Spanish for Beginners",
            "Learn Spanish from scratch with native speakers. Master basic conversations and grammar.",
            Category::Languages,
            Level::Beginner,
            "15 hours",
            79,
            129,
            4.5,
            2800,
            "Carlos Mendez",
            "Spanish Language Instructor",
            &[
                "Basic greetings and introductions",
                "Essential vocabulary",
                "Grammar fundamentals",
                "Conversation practice",
                "Cultural insights",
            ],
            "fas fa-globe",
        ),
        course(
            8,
            "Photography Masterclass",
            "Capture stunning photos with any camera. Learn composition, lighting, and post-processing.",
            Category::Music,
            Level::Intermediate,
            "18 hours",
            139,
            199,
            4.8,
            1900,
            "Rachel Green",
            "Professional Photographer",
            &[
                "Camera fundamentals",
                "Composition techniques",
                "Lighting principles",
                "Portrait photography",
                "Photo editing basics",
            ],
            "fas fa-camera",
        ),
    ]
}
