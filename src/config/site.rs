//! Static site content. Built once at startup and handed to the view layer
//! through a `ContextProvider`; nothing below the presentation layer reads it.

use crate::Route;

#[derive(Clone, PartialEq)]
pub struct SiteConfig {
    pub developer: Developer,
    pub social: Social,
    pub nav_items: Vec<NavItem>,
    pub skills: Vec<SkillCategory>,
    pub experiences: Vec<ExperienceEntry>,
    pub showcase: Vec<ShowcaseProject>,
    pub contact: Vec<ContactMethod>,
}

#[derive(Clone, PartialEq)]
pub struct Developer {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Social {
    /// GitHub login whose public repositories are listed.
    pub github: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

#[derive(Clone, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub skills: Vec<Skill>,
}

#[derive(Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
    pub hot: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Clone, PartialEq)]
pub struct ExperienceEntry {
    pub position: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub responsibilities: Vec<&'static str>,
    pub technologies: Vec<&'static str>,
}

/// Curated project entry, independent of the repositories fetched from
/// GitHub.
#[derive(Clone, PartialEq)]
pub struct ShowcaseProject {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: Vec<&'static str>,
    pub github: &'static str,
    pub demo: Option<&'static str>,
}

#[derive(Clone, PartialEq)]
pub struct ContactMethod {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            developer: Developer {
                name: "Muhammad Aslah",
                headline: "I build web that builds brands.",
                tagline: "Full-stack builder creating digital experiences that \
                          respect humans and scale with clarity. Accessibility \
                          is my north star.",
            },
            social: Social { github: "aslahkp01" },
            nav_items: vec![
                NavItem {
                    label: "Home",
                    route: Route::Home,
                },
                NavItem {
                    label: "Projects",
                    route: Route::Projects,
                },
                NavItem {
                    label: "Contact",
                    route: Route::Contact,
                },
            ],
            skills: vec![
                SkillCategory {
                    title: "Web Development",
                    icon: "bi bi-code-slash",
                    description: "Frontend and MERN stack development",
                    skills: vec![
                        Skill {
                            name: "HTML & CSS",
                            level: SkillLevel::Advanced,
                            hot: true,
                        },
                        Skill {
                            name: "JavaScript",
                            level: SkillLevel::Intermediate,
                            hot: true,
                        },
                        Skill {
                            name: "React.js",
                            level: SkillLevel::Intermediate,
                            hot: false,
                        },
                        Skill {
                            name: "Node.js",
                            level: SkillLevel::Intermediate,
                            hot: false,
                        },
                        Skill {
                            name: "MongoDB",
                            level: SkillLevel::Intermediate,
                            hot: false,
                        },
                    ],
                },
                SkillCategory {
                    title: "Embedded & Hardware",
                    icon: "bi bi-cpu",
                    description: "Electronics, sensors & microcontrollers",
                    skills: vec![
                        Skill {
                            name: "Embedded C",
                            level: SkillLevel::Intermediate,
                            hot: true,
                        },
                        Skill {
                            name: "PIC Microcontrollers",
                            level: SkillLevel::Intermediate,
                            hot: false,
                        },
                        Skill {
                            name: "PCB Design",
                            level: SkillLevel::Intermediate,
                            hot: false,
                        },
                        Skill {
                            name: "KiCad",
                            level: SkillLevel::Intermediate,
                            hot: false,
                        },
                        Skill {
                            name: "Altium",
                            level: SkillLevel::Beginner,
                            hot: false,
                        },
                    ],
                },
                SkillCategory {
                    title: "Programming & Tools",
                    icon: "bi bi-box",
                    description: "Languages & simulation tools",
                    skills: vec![
                        Skill {
                            name: "Python",
                            level: SkillLevel::Intermediate,
                            hot: true,
                        },
                        Skill {
                            name: "C++",
                            level: SkillLevel::Intermediate,
                            hot: false,
                        },
                        Skill {
                            name: "Verilog",
                            level: SkillLevel::Beginner,
                            hot: false,
                        },
                        Skill {
                            name: "MATLAB",
                            level: SkillLevel::Intermediate,
                            hot: false,
                        },
                        Skill {
                            name: "HFSS",
                            level: SkillLevel::Intermediate,
                            hot: false,
                        },
                    ],
                },
            ],
            experiences: vec![ExperienceEntry {
                position: "B.Tech Student – Electronics & Communication",
                company: "Mar Athanasius College of Engineering",
                period: "Oct 2022 – June 2026",
                location: "Kerala, India",
                description: "Passionate and self-motivated engineering student \
                              focusing on electronics, embedded systems and \
                              full-stack web development. Currently pursuing \
                              B.Tech in ECE.",
                responsibilities: vec![
                    "Working on academic and personal projects that combine hardware and software.",
                    "Learning MERN stack to build real-world web applications.",
                    "Designing microwave and RF-based sensors using tools like HFSS.",
                    "Building embedded systems with microcontrollers and RF modules.",
                ],
                technologies: vec![
                    "C++",
                    "Python",
                    "JavaScript",
                    "MERN Stack",
                    "Embedded C",
                    "HFSS",
                    "MATLAB",
                    "KiCad",
                    "Altium",
                ],
            }],
            showcase: vec![
                ShowcaseProject {
                    title: "Microwave Based Liquid Adulteration Sensor",
                    description: "Microwave sensor prototype using microstrip \
                                  antenna principles to detect adulteration in \
                                  liquids such as milk and honey. Uses dielectric \
                                  property variations to distinguish pure vs \
                                  adulterated samples.",
                    technologies: vec!["HFSS", "Microwave Sensing", "Microstrip Antenna"],
                    github: "https://github.com/aslahkp01",
                    demo: None,
                },
                ShowcaseProject {
                    title: "Wireless Water Level Controller Using RF Modules",
                    description: "Wireless water level monitoring and motor \
                                  control system using PIC16F1503 and RF modules. \
                                  Automatically controls pump operation based on \
                                  tank level, reducing manual monitoring.",
                    technologies: vec!["PIC16F1503", "Embedded C", "RF Modules", "Sensors"],
                    github: "https://github.com/aslahkp01",
                    demo: None,
                },
                ShowcaseProject {
                    title: "Temperature Monitoring System",
                    description: "Temperature variation detection circuit using \
                                  Op-Amp 741. Provides real-time visual indication \
                                  when temperature crosses safe limits, improving \
                                  safety and reliability of electronic systems.",
                    technologies: vec!["Op-Amp 741", "Analog Electronics", "Sensors"],
                    github: "https://github.com/aslahkp01",
                    demo: None,
                },
                ShowcaseProject {
                    title: "ShopCart – E-Commerce Platform (MERN Stack)",
                    description: "Full-featured e-commerce web application with \
                                  product management, shopping cart, user-facing \
                                  storefront and basic admin panel built using the \
                                  MERN stack.",
                    technologies: vec!["MongoDB", "Express", "React.js", "Node.js"],
                    github: "https://github.com/aslahkp01",
                    demo: None,
                },
            ],
            contact: vec![
                ContactMethod {
                    icon: "bi bi-github",
                    label: "GitHub",
                    value: "@aslahkp01",
                    link: Some("https://github.com/aslahkp01"),
                },
                ContactMethod {
                    icon: "bi bi-envelope",
                    label: "Email",
                    value: "aslahkp007@gmail.com",
                    link: Some("mailto:aslahkp007@gmail.com"),
                },
                ContactMethod {
                    icon: "bi bi-geo-alt",
                    label: "Location",
                    value: "Kerala, India",
                    link: None,
                },
            ],
        }
    }
}
