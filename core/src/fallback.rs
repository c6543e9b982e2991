//! Bundled content shown when the backend is unreachable or returns nothing.

use crate::types::{Faq, Project, Service, Statistic, Testimonial};

fn service(id: i64, icon: &str, title: &str, description: &str, color: &str) -> Service {
    Service {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon: Some(icon.to_string()),
        color: Some(color.to_string()),
        order_index: Some(id),
        is_active: Some(true),
        created_at: None,
        updated_at: None,
    }
}

pub fn services() -> Vec<Service> {
    vec![
        service(
            1,
            "Code",
            "Web Development",
            "Modern, responsive, and scalable websites built with cutting-edge technologies.",
            "from-blue-500 to-cyan-500",
        ),
        service(
            2,
            "Bot",
            "Chatbot Services",
            "AI-powered chatbots that enhance user engagement and automate customer support.",
            "from-purple-500 to-pink-500",
        ),
        service(
            3,
            "Mic",
            "Voice2Doc",
            "Convert speech into smart, structured documents with advanced AI processing.",
            "from-green-500 to-emerald-500",
        ),
        service(
            4,
            "PenTool",
            "Social Media Content",
            "Creative content strategies to boost your digital presence and engagement.",
            "from-orange-500 to-red-500",
        ),
        service(
            5,
            "Palette",
            "Smart Poster & Logo",
            "Eye-catching designs that reflect your brand identity and captivate audiences.",
            "from-indigo-500 to-purple-500",
        ),
        service(
            6,
            "Sparkles",
            "AI/ML Solutions",
            "Custom AI and machine learning solutions tailored to your business needs.",
            "from-yellow-500 to-orange-500",
        ),
    ]
}

fn project(id: i64, title: &str, category: &str, description: &str, gradient: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        image_url: None,
        gradient: Some(gradient.to_string()),
        live_url: None,
        github_url: None,
        order_index: Some(id),
        is_featured: Some(true),
        created_at: None,
        updated_at: None,
    }
}

pub fn portfolio() -> Vec<Project> {
    vec![
        project(
            1,
            "Smart AI Bot",
            "AI/ML",
            "Intelligent chatbot solution with natural language processing capabilities.",
            "from-blue-500 to-cyan-500",
        ),
        project(
            2,
            "Innovative Web App",
            "Web Development",
            "Modern web application with real-time features and seamless user experience.",
            "from-purple-500 to-pink-500",
        ),
        project(
            3,
            "Voice2Doc System",
            "AI/ML",
            "Advanced voice-to-document conversion system powered by AI.",
            "from-green-500 to-emerald-500",
        ),
    ]
}

fn testimonial(id: i64, name: &str, role: &str, content: &str, avatar: &str) -> Testimonial {
    Testimonial {
        id,
        name: name.to_string(),
        role: role.to_string(),
        content: content.to_string(),
        rating: Some(5.0),
        avatar: Some(avatar.to_string()),
        company_logo_url: None,
        order_index: Some(id),
        is_approved: Some(true),
        created_at: None,
        updated_at: None,
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            1,
            "Sarah Johnson",
            "CEO, TechStart Inc.",
            "J4.Innovate transformed our business with their AI-powered solutions. The team is professional, innovative, and delivers beyond expectations.",
            "SJ",
        ),
        testimonial(
            2,
            "Michael Chen",
            "CTO, Digital Solutions",
            "Outstanding web development services! They built our platform with cutting-edge technology and it's been performing flawlessly.",
            "MC",
        ),
        testimonial(
            3,
            "Emily Rodriguez",
            "Founder, Creative Agency",
            "The Voice2Doc system they developed has revolutionized our workflow. Highly recommend their AI/ML expertise!",
            "ER",
        ),
        testimonial(
            4,
            "David Thompson",
            "Product Manager, InnovateCo",
            "Professional, timely, and innovative. J4.Innovate is our go-to partner for all software development needs.",
            "DT",
        ),
    ]
}

fn statistic(id: i64, number: &str, label: &str, icon: &str, color: &str) -> Statistic {
    Statistic {
        id,
        number: number.to_string(),
        label: label.to_string(),
        icon: Some(icon.to_string()),
        color: Some(color.to_string()),
        order_index: Some(id),
        is_active: Some(true),
        created_at: None,
        updated_at: None,
    }
}

pub fn statistics() -> Vec<Statistic> {
    vec![
        statistic(1, "500+", "Projects Completed", "Code2", "from-blue-500 to-cyan-500"),
        statistic(2, "300+", "Happy Clients", "Users", "from-purple-500 to-pink-500"),
        statistic(3, "97%", "Client Retention", "Award", "from-green-500 to-emerald-500"),
        statistic(4, "250+", "Technology Experts", "TrendingUp", "from-orange-500 to-red-500"),
    ]
}

fn faq(id: i64, question: &str, answer: &str) -> Faq {
    Faq {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
        order_index: Some(id),
        is_active: Some(true),
        created_at: None,
        updated_at: None,
    }
}

pub fn faqs() -> Vec<Faq> {
    vec![
        faq(
            1,
            "What services does J4.Innovate offer?",
            "We offer comprehensive software development services including Web Development, AI/ML Solutions, Mobile App Development, Cloud Services, Chatbot Development, Voice2Doc systems, and UI/UX Design services.",
        ),
        faq(
            2,
            "How long does a typical project take?",
            "Project timelines vary based on scope and complexity. A simple website might take 2-4 weeks, while a complex AI-powered application could take 3-6 months. We provide detailed timelines during our initial consultation.",
        ),
        faq(
            3,
            "Do you provide ongoing support and maintenance?",
            "Yes! We offer comprehensive maintenance and support packages to ensure your software continues to perform optimally. This includes updates, bug fixes, security patches, and feature enhancements.",
        ),
        faq(
            4,
            "What technologies do you specialize in?",
            "We work with modern tech stacks including React, Next.js, Node.js, Python, AI/ML frameworks (ChatGPT, Gemini, Claude), cloud platforms (AWS, Azure, GCP), and mobile technologies (React Native, Flutter).",
        ),
        faq(
            5,
            "Can I hire dedicated developers?",
            "Absolutely! We offer dedicated developer hiring services where you can extend your team with our expert developers on a full-time or part-time basis.",
        ),
        faq(
            6,
            "How do you ensure code quality?",
            "We follow industry best practices including code reviews, automated testing, CI/CD pipelines, and maintain high coding standards. All code goes through rigorous quality assurance processes.",
        ),
    ]
}
