//! Static page content.
//!
//! Copy, links and asset paths for every section live here so the view layer
//! only arranges them.

/// Studio name used in the header, footer and page titles.
pub const STUDIO_NAME: &str = "VAUM Studio";
/// One-line studio description.
pub const STUDIO_TAGLINE: &str = "Creating amazing digital experiences";
/// Credited designer.
pub const DESIGNER_NAME: &str = "Vachika Bhanderi";

/// A contact channel shown in the contact section and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    /// Which icon and link behaviour to use.
    pub kind: ContactLinkKind,
    /// Visible text.
    pub label: &'static str,
    /// Link target.
    pub href: &'static str,
}

/// Contact channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLinkKind {
    /// `mailto:` link.
    Email,
    /// The studio website.
    Website,
    /// Instagram profile, opened in a new tab.
    Instagram,
}

impl ContactLink {
    /// Links leaving the site open in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        self.kind == ContactLinkKind::Instagram
    }
}

/// Contact channels in display order.
pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        kind: ContactLinkKind::Email,
        label: "vaum.branding@gmail.com",
        href: "mailto:vaum.branding@gmail.com",
    },
    ContactLink {
        kind: ContactLinkKind::Website,
        label: "www.vaum.studio",
        href: "https://www.vaum.studio",
    },
    ContactLink {
        kind: ContactLinkKind::Instagram,
        label: "vaum.studio",
        href: "https://instagram.com/vaum.studio",
    },
];

/// Services scrolled through the ticker bars.
pub const TICKER_SERVICES: [&str; 4] = [
    "Website Design",
    "Application Design",
    "Logo Design",
    "Brochure Design",
];

/// Number of times the ticker repeats its service list so the loop never shows a gap.
pub const TICKER_REPEATS: usize = 7;

/// Ticker entries in display order.
pub fn ticker_items() -> impl Iterator<Item = &'static str> {
    TICKER_SERVICES
        .iter()
        .copied()
        .cycle()
        .take(TICKER_SERVICES.len() * TICKER_REPEATS)
}

/// A card in the services grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    /// Card heading.
    pub title: &'static str,
    /// Card body text.
    pub description: &'static str,
    /// Icon asset path.
    pub icon_src: &'static str,
    /// Icon alt text.
    pub icon_alt: &'static str,
}

/// Services grid cards in display order.
pub const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        title: "UI/UX Design",
        description: "Creating user-friendly and visually appealing digital experiences that ...",
        icon_src: "/computer (1).gif",
        icon_alt: "Computer",
    },
    ServiceCard {
        title: "Application Design",
        description: "Designing intuitive and efficient mobile and desktop applications ...",
        icon_src: "/vector (1).gif",
        icon_alt: "Vector",
    },
    ServiceCard {
        title: "Website Design",
        description: "Crafting modern, responsive, and impactful websites that ...",
        icon_src: "/web-design (1).gif",
        icon_alt: "Web Design",
    },
];

/// Labels orbiting the about-section portrait.
pub const ABOUT_BADGES: [&str; 7] = [
    "Website Design",
    "Application Design",
    "UI/UX Design",
    "Brochure Design",
    "Prototype",
    "Logo Design",
    "Wireframe Design",
];

/// A count-up statistic. `target` is rendered into `data-target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutStat {
    /// Final value.
    pub target: u32,
    /// Caption under the number.
    pub label: &'static str,
}

/// Count-up statistics in the about section.
pub const ABOUT_STATS: [AboutStat; 3] = [
    AboutStat {
        target: 20,
        label: "Project Completed",
    },
    AboutStat {
        target: 5,
        label: "Industry Covered",
    },
    AboutStat {
        target: 2,
        label: "Years of Experience",
    },
];

/// About section body copy.
pub const ABOUT_DESCRIPTION: &str = "At Vaum Branding studio, we craft unique and impactful brand \
identities that help businesses stand out. From logo design and brand strategy to digital \
creatives, we blend creativity with strategy to deliver designs that inspire and connect with \
your audience.";

/// Hero introduction.
pub const HERO_DESCRIPTION: &str = "Passionate Graphic Designer with expertise in branding, logo \
identity, and creative strategy. Helping businesses and startups build strong visual identities \
through impactful design.";

/// Contact section body copy.
pub const CONTACT_DESCRIPTION: &str = "At Vaum Branding Studio, we love collaborating on ideas \
that inspire. Whether you need branding, a website, or digital design, let's create something \
unique together!";

/// A client quote in the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    /// Quote text.
    pub quote: &'static str,
    /// Client name.
    pub author: &'static str,
    /// Client position.
    pub role: &'static str,
    /// Star rating as displayed.
    pub rating: &'static str,
}

/// Carousel entries in display order.
pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Working with Vaum Studio was honestly the best decision we made for our brand. \
We had so many ideas but no clear direction, and they just got it. The team really listened, \
brought fresh ideas, and turned everything into something that felt so us. We're absolutely \
obsessed with the final result.",
        author: "Harsh Vora",
        role: "Founder, Delight Autoforge",
        rating: "5.0",
    },
    Testimonial {
        quote: "Vaum Studio totally nailed it. They didn't just make our brand look good, they \
gave it personality. The whole process felt super smooth, and the team was always open, \
creative, and on point. Since launching our new look, we've seen a huge boost in how people \
connect with our brand.",
        author: "Manas Vadodaria",
        role: "CEO, Codelix It Solutions",
        rating: "5.0",
    },
    Testimonial {
        quote: "The team at Vaum Studio just gets it. They turned our ideas into something \
beautiful and meaningful. We feel much more confident showing off our brand now, and it's been \
a total game-changer for our business. Can't recommend them enough!",
        author: "Yash Sabhaya",
        role: "CTO, Sabhaya Solutions",
        rating: "5.0",
    },
];

// About page

/// About page story paragraphs.
pub const STUDIO_STORY: [&str; 2] = [
    "Founded with a vision to bridge the gap between creativity and technology, VAUM Studio has \
been at the forefront of digital innovation. We believe that great design and robust development \
go hand in hand to create meaningful user experiences.",
    "Our team combines years of experience in web development, user experience design, and \
digital strategy to deliver solutions that not only meet your requirements but exceed your \
expectations.",
];

/// Fixed (non-animated) figures on the about page.
pub const STUDIO_STATS: [(&str, &str); 3] = [
    ("50+", "Projects Completed"),
    ("5+", "Years Experience"),
    ("100%", "Client Satisfaction"),
];

/// A person on the about page team grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    /// Emoji avatar.
    pub avatar: &'static str,
    /// Full name.
    pub name: &'static str,
    /// Job title.
    pub role: &'static str,
}

/// Team grid in display order.
pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        avatar: "👨‍💻",
        name: "John Doe",
        role: "Lead Developer",
    },
    TeamMember {
        avatar: "👩‍🎨",
        name: "Jane Smith",
        role: "UI/UX Designer",
    },
    TeamMember {
        avatar: "👨‍💼",
        name: "Mike Johnson",
        role: "Project Manager",
    },
];
