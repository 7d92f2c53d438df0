use folio_protocol::{Color, ContactMethod, Gradient};

pub static CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        icon: "📧",
        title: "Email",
        value: "uunni553@gmail.com",
        link: "mailto:uunni553@gmail.com",
        gradient: Gradient::new(Color::rgb8(0xf8, 0x71, 0x71), Color::rgb8(0xec, 0x48, 0x99)),
        opens_external: false,
    },
    ContactMethod {
        icon: "📱",
        title: "Phone",
        value: "+91 6282695240",
        link: "tel:+916282695240",
        gradient: Gradient::new(Color::rgb8(0x4a, 0xde, 0x80), Color::rgb8(0x3b, 0x82, 0xf6)),
        opens_external: false,
    },
    ContactMethod {
        icon: "💼",
        title: "LinkedIn",
        value: "Connect with me",
        link: "https://www.linkedin.com/in/deva-narayan-99531b278/",
        gradient: Gradient::new(Color::rgb8(0x60, 0xa5, 0xfa), Color::rgb8(0x63, 0x66, 0xf1)),
        opens_external: true,
    },
];

pub const CONTACT_HEADLINE: &str = "Ready to collaborate?";

pub const CONTACT_BLURB: &str = "I'm always excited to work on new projects and collaborate with \
    innovative teams. Let's discuss how we can create something amazing together!";

pub const AVAILABILITY: &str = "Available for new opportunities";

pub const AVAILABILITY_DETAIL: &str = "Currently seeking internships and entry-level positions";
