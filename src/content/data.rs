use super::{EntryKind, ExperienceEntry, Profile, Project, SocialLink};

pub(super) static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "DevCollab",
        description: "A full-stack platform where developers can share projects, connect, and collaborate in real time.",
        tech_stack: &["MongoDB", "Express", "React", "Node.js", "Socket.io"],
        category: "Full Stack",
        image: Some("devcollab.jpg"),
        live_link: Some("https://dev-collab-frontend-alpha.vercel.app/"),
    },
    Project {
        id: 2,
        title: "The Good Burger",
        description: "A modern restaurant web application that showcases menu items, enables online ordering, and delivers a smooth, responsive user experience across all devices.",
        tech_stack: &["React", "Tailwind CSS", "Vite", "Framer Motion"],
        category: "Web App",
        image: Some("tgb.png"),
        live_link: Some("https://the-good-burger.vercel.app/"),
    },
];

pub(super) static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        id: 1,
        company: "Self-Employed",
        role: "Full Stack Developer",
        duration: "2026 – Present",
        description: &[
            "Developed custom MERN stack applications",
            "Implemented secure authentication systems (JWT, role-based access)",
            "Built and deployed production-ready web apps",
        ],
        kind: EntryKind::Work,
    },
    ExperienceEntry {
        id: 2,
        company: "INNOV8",
        role: "Frontend Developer",
        duration: "2024 – 2025",
        description: &[
            "Built responsive web applications",
            "Optimized UI performance and improved user experience",
            "Collaborated with backend team for feature implementation",
        ],
        kind: EntryKind::Work,
    },
    ExperienceEntry {
        id: 3,
        company: "Saffron Labs",
        role: "Trainee (Frontend Intern)",
        duration: "2024",
        description: &[
            "Assisted in developing UI components using React",
            "Learned and applied CSS best practices for responsive design",
            "Gained hands-on experience with modern frontend development workflows",
        ],
        kind: EntryKind::Work,
    },
];

pub(super) static PROFILE: Profile = Profile {
    name: "Abu Bakar Khawaja",
    tagline: "Less talk. More building.",
    introduction: &[
        ("I am a ", false),
        ("Software Engineer", true),
        (" specializing in ", false),
        ("full-stack development", true),
        (", building scalable and high-performance digital products. I design and architect fast, reliable web applications using technologies such as ", false),
        ("Next.js, React, Tailwind CSS, Node.js, Express, and MongoDB.", true),
        (" With a strong focus on backend architecture, security, and system design, I deliver clean, efficient, ", false),
        ("production-ready software", true),
        (" built for real-world impact.", false),
    ],
    about_heading: "About Abu Bakar Khawaja",
    about_tagline: "I don’t just write code. I engineer scalable systems.",
    about: &[
        &[
            ("I’m a ", false),
            ("Software Engineer", true),
            (" and ", false),
            ("MERN Stack Developer", true),
            (" specializing in building ", false),
            ("production-grade and scalable web applications", true),
            (". Using MongoDB, Express, React, and Node.js, I develop high-performance platforms designed to handle real users, real traffic, and complex business logic, not tutorial-level builds.", false),
        ],
        &[
            ("With a strong foundation in ", false),
            ("backend architecture", true),
            (", API design, authentication systems, and database optimization, I focus on writing ", false),
            ("clean, maintainable code", true),
            (" that scales. I build live applications with real-time features, secure data handling, and infrastructure-ready server logic built for growth.", false),
        ],
        &[
            ("I approach every project with an ", false),
            ("engineering mindset", true),
            (", prioritizing scalability, performance, and long-term reliability from day one. My objective is simple: deliver robust software that performs under pressure and creates ", false),
            ("measurable impact", true),
            (".", false),
        ],
    ],
    projects_blurb: "A curated collection of my featured projects, showcasing innovative solutions built with modern full-stack technologies and scalable architecture.",
    skills_blurb: "The languages, frameworks and tools I use every day. Drag the sphere to explore.",
    experience_blurb: "My professional journey and career milestones in the software industry.",
    contact_heading: "Let’s Build Something Real.",
    contact_blurb: "Open to new opportunities and freelance projects. Drop a message and let's build something amazing.",
    email: "abubakarkhawaja412@gmail.com",
    availability: "Available for freelance & contract work",
    socials: &[
        SocialLink {
            label: "GitHub",
            url: "https://github.com/abuabakar000",
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/abu-bakar-khawaja-dev",
        },
    ],
    resume_download_name: "Abu Bakar Khawaja.pdf",
    footer: "© 2026 CODED WITH HEART",
};
