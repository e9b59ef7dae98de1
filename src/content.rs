//! Static page content.
//!
//! Everything shown on the page outside the particle field is literal data;
//! the section views in [`crate::sections`] only lay it out.

/// Site owner's full name.
pub const OWNER_NAME: &str = "Naraganti Sunil Kumar";
/// Short name shown in the hero.
pub const DISPLAY_NAME: &str = "Sunil Kumar";
/// Wordmark used by the navigation bar and footer.
pub const LOGO: &str = "SUNIL";
pub const EMAIL: &str = "naragantisunilkumar@gmail.com";
pub const PHONE: &str = "+91-8328510888";
pub const LOCATION: &str = "Bengaluru, India";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sunilkumarnaraganti/";
pub const GITHUB_URL: &str = "https://github.com/SunilKumar2112";

/// `mailto:` link for the owner's address.
pub fn mailto() -> String {
	format!("mailto:{EMAIL}")
}

/// Greeting for a local hour in `0..24`.
pub fn greeting_for_hour(hour: u32) -> &'static str {
	match hour {
		0..=11 => "Good Morning",
		12..=17 => "Good Afternoon",
		_ => "Good Evening",
	}
}

pub struct NavLink {
	pub href: &'static str,
	pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
	NavLink { href: "#about", label: "About" },
	NavLink { href: "#skills", label: "Skills" },
	NavLink { href: "#experience", label: "Experience" },
	NavLink { href: "#projects", label: "Projects" },
	NavLink { href: "#contact", label: "Contact" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
	NavLink { href: "#about", label: "About" },
	NavLink { href: "#skills", label: "Services" },
	NavLink { href: "#projects", label: "Projects" },
	NavLink { href: "#contact", label: "Contact" },
];

/// An external profile with its 24x24 SVG icon path.
pub struct SocialLink {
	pub label: &'static str,
	pub href: &'static str,
	pub icon_path: &'static str,
}

const LINKEDIN_ICON: &str = "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z";

/// GitHub mark, also used for "View Code" links.
pub const GITHUB_ICON: &str = "M12 0C5.374 0 0 5.373 0 12c0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23A11.509 11.509 0 0112 5.803c1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576C20.566 21.797 24 17.3 24 12c0-6.627-5.373-12-12-12z";

pub const SOCIAL_LINKS: &[SocialLink] = &[
	SocialLink {
		label: "LinkedIn",
		href: LINKEDIN_URL,
		icon_path: LINKEDIN_ICON,
	},
	SocialLink {
		label: "GitHub",
		href: GITHUB_URL,
		icon_path: GITHUB_ICON,
	},
];

/// A hero statistic animated by the count-up counter.
pub struct HeroStat {
	pub value: u32,
	pub suffix: &'static str,
	pub label: &'static str,
}

pub const HERO_STATS: &[HeroStat] = &[
	HeroStat { value: 5, suffix: "+", label: "Microservices Built" },
	HeroStat { value: 85, suffix: "%+", label: "Test Coverage" },
	HeroStat { value: 99, suffix: "%", label: "System Uptime" },
];

/// Icon plus short text, used by trust badges.
pub struct Badge {
	pub icon: &'static str,
	pub text: &'static str,
}

pub const TRUST_BADGES: &[Badge] = &[
	Badge { icon: "☁️", text: "Azure Certified" },
	Badge { icon: "🌐", text: "GCP Certified" },
	Badge { icon: "⚛️", text: "React Expert" },
	Badge { icon: "🏆", text: "Award Winner" },
];

pub struct Highlight {
	pub icon: &'static str,
	pub title: &'static str,
	pub text: &'static str,
}

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
	Highlight {
		icon: "🎯",
		title: "99%+ System Availability",
		text: "Building fault-tolerant architectures that never let you down",
	},
	Highlight {
		icon: "🧪",
		title: "80%+ Code Coverage",
		text: "Comprehensive testing for production confidence",
	},
	Highlight {
		icon: "☁️",
		title: "Cloud-Native Expert",
		text: "Azure & GCP certified with Docker expertise",
	},
	Highlight {
		icon: "🎓",
		title: "B.Tech CSE Graduate",
		text: "N.B.K.R Institute with First Class Distinction",
	},
];

pub struct Service {
	pub icon: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
	Service {
		icon: "⚙️",
		title: "Backend Development",
		description: "Scalable microservices with Spring Boot, REST APIs, and enterprise patterns.",
		features: &["Spring Boot", "Microservices", "REST APIs", "Groovy"],
	},
	Service {
		icon: "🎨",
		title: "Frontend Development",
		description: "Modern, responsive UIs with React, TypeScript, and state-of-the-art tooling.",
		features: &["React", "TypeScript", "Chakra UI", "CSS3"],
	},
	Service {
		icon: "☁️",
		title: "Cloud & DevOps",
		description: "Cloud-native deployments with CI/CD pipelines and container orchestration.",
		features: &["Azure", "GCP", "Docker", "Jenkins"],
	},
	Service {
		icon: "🧪",
		title: "Quality Assurance",
		description: "Comprehensive testing strategies ensuring production-ready code delivery.",
		features: &["JUnit 5", "Mockito", "TestContainers", "TDD"],
	},
];

pub struct Job {
	pub company: &'static str,
	/// Letter shown in the company logo tile.
	pub initial: &'static str,
	pub role: &'static str,
	pub period: &'static str,
	pub location: &'static str,
	pub achievements: &'static [&'static str],
}

pub const EXPERIENCE: &[Job] = &[Job {
	company: "Zensar Technologies",
	initial: "Z",
	role: "Junior Software Engineer",
	period: "Feb 2025 – Present",
	location: LOCATION,
	achievements: &[
		"Owned development of multiple Spring Boot microservices handling high-volume production traffic with 99%+ availability",
		"Led testing initiatives by implementing JUnit and Mockito test suites, achieving 80%+ code coverage",
		"Designed a fault-tolerant retry mechanism for critical order-processing workflow, eliminating manual interventions",
		"Diagnosed and fixed service-layer logic bugs, improving system reliability and user experience",
		"Built Groovy-based backend integrations enabling real-time UI notifications",
	],
}];

pub struct Project {
	pub title: &'static str,
	pub description: &'static str,
	pub tech: &'static [&'static str],
	pub features: &'static [&'static str],
	pub image: &'static str,
	pub github: &'static str,
	pub live: Option<&'static str>,
	pub category: &'static str,
}

pub const PROJECTS: &[Project] = &[
	Project {
		title: "E-Commerce Microservices Platform",
		description: "A production-ready e-commerce backend with 5 independently deployable microservices, featuring service discovery, secure JWT authentication, and comprehensive testing.",
		tech: &["Spring Boot", "React", "MySQL", "Docker", "Spring Cloud", "Eureka"],
		features: &[
			"5 microservices with Spring Cloud",
			"JWT auth with role-based access",
			"85% test coverage",
			"Containerized with Docker",
		],
		image: "/ecommerce.png",
		github: "https://github.com/SunilKumar2112/ecommerce-microservices",
		live: None,
		category: "Backend",
	},
	Project {
		title: "Cineverse - Entertainment Platform",
		description: "A high-performance movie and TV show discovery app with React Query for efficient caching, infinite scrolling, and a 95+ Lighthouse score.",
		tech: &["React", "TypeScript", "Chakra UI", "React Query", "TMDB API"],
		features: &[
			"Infinite scrolling & debounced search",
			"Genre-based filtering",
			"95+ Lighthouse performance",
			"Automatic CI/CD on Vercel",
		],
		image: "/cineverse.png",
		github: "https://github.com/SunilKumar2112/Cineverse",
		live: Some("https://cine-verse-eight.vercel.app/"),
		category: "Frontend",
	},
];

pub struct Certification {
	pub name: &'static str,
	pub issuer: &'static str,
	pub icon: &'static str,
	/// Brand color as a `#rrggbb` hex string.
	pub color: &'static str,
}

impl Certification {
	/// Inline style for the icon tile: translucent brand background.
	pub fn icon_style(&self) -> String {
		format!("background: {}20; color: {}", self.color, self.color)
	}
}

pub const CERTIFICATIONS: &[Certification] = &[
	Certification {
		name: "Azure Fundamentals (AZ-900)",
		issuer: "Microsoft",
		icon: "☁️",
		color: "#0078d4",
	},
	Certification {
		name: "Google Cloud Digital Leader",
		issuer: "Google Cloud",
		icon: "🌐",
		color: "#4285f4",
	},
	Certification {
		name: "Frontend Developer (React)",
		issuer: "HackerRank",
		icon: "⚛️",
		color: "#61dafb",
	},
	Certification {
		name: "SQL & Python",
		issuer: "Infosys Springboard",
		icon: "💾",
		color: "#00bcd4",
	},
];

pub struct Achievement {
	pub icon: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	pub kind: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
	Achievement {
		icon: "🥇",
		title: "1st Prize - \"Coffee with Java\"",
		description: "Coding Competition by Computer Society of India",
		kind: "Competition",
	},
	Achievement {
		icon: "🥈",
		title: "2nd Prize - Tech Spark & Techno Philia",
		description: "Technical event showcasing problem-solving excellence",
		kind: "Competition",
	},
	Achievement {
		icon: "👔",
		title: "Event Lead - TECHVYUHA",
		description: "Organized technical symposium with 200+ participants",
		kind: "Leadership",
	},
	Achievement {
		icon: "🎤",
		title: "Speaker - SRUJANA 2K19",
		description: "Presented on \"Graph Theory Applications\"",
		kind: "Speaking",
	},
];

pub struct TeamMember {
	pub name: &'static str,
	pub role: &'static str,
	pub description: &'static str,
	pub portfolio: &'static str,
	pub initials: &'static str,
}

pub const TEAM: &[TeamMember] = &[TeamMember {
	name: "Neeli Manikanta",
	role: "Full Stack Developer",
	description: "Expert in building enterprise-grade web and mobile applications with focus on school management systems and automation.",
	portfolio: "https://neelimanikantaportfolio.onrender.com/",
	initials: "NM",
}];

/// A way to reach the owner. Channels without `href` render as plain text.
pub struct ContactChannel {
	pub icon: &'static str,
	pub title: &'static str,
	pub value: &'static str,
	pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
	ContactChannel {
		icon: "✉️",
		title: "Email",
		value: EMAIL,
		href: Some("mailto:naragantisunilkumar@gmail.com"),
	},
	ContactChannel {
		icon: "📱",
		title: "Phone",
		value: PHONE,
		href: Some("tel:+918328510888"),
	},
	ContactChannel {
		icon: "📍",
		title: "Location",
		value: LOCATION,
		href: None,
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn greeting_boundaries() {
		assert_eq!(greeting_for_hour(0), "Good Morning");
		assert_eq!(greeting_for_hour(11), "Good Morning");
		assert_eq!(greeting_for_hour(12), "Good Afternoon");
		assert_eq!(greeting_for_hour(17), "Good Afternoon");
		assert_eq!(greeting_for_hour(18), "Good Evening");
		assert_eq!(greeting_for_hour(23), "Good Evening");
	}

	#[test]
	fn nav_links_point_at_sections() {
		assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
		assert!(FOOTER_LINKS.iter().all(|l| NAV_LINKS.iter().any(|n| n.href == l.href)));
	}

	#[test]
	fn email_channel_matches_mailto() {
		assert_eq!(CONTACT_CHANNELS[0].href, Some(mailto().as_str()));
	}

	#[test]
	fn certification_icon_style() {
		assert_eq!(
			CERTIFICATIONS[0].icon_style(),
			"background: #0078d420; color: #0078d4"
		);
	}
}
