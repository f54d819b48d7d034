//! The site's static content.
//!
//! Each entry is a `/`-separated path and the text `cat` prints for it.
//! Text may carry ANSI colors and OSC 8 hyperlinks; it is printed as is.

use crate::tree::Tree;

pub const SITE_TITLE: &str = "Shreyaas' Website";

pub const ENTRIES: &[(&str, &str)] = &[
    (
        "about_me/links.txt",
        "\x1b]8;;https://www.linkedin.com/in/shreyaas14/\x1b\\Linkedin\x1b]8;;\x1b\\, \
         \x1b]8;;https://nyubnf.com/\x1b\\BNF Website\x1b]8;;\x1b\\",
    ),
    (
        "about_me/interests.txt",
        "Machine Learning, Distributed Systems, Blockchain",
    ),
    (
        "about_me/currently_reading.txt",
        "\r\n\
         Designing Data-Intensive Applications - Martin Kleppmann\r\n\
         Operating Systems: Three Easy Pieces - Andrea Arpaci-Dusseau and Remzi Arpaci-Dusseau",
    ),
    (
        "about_me/experiences.txt",
        "\r\n\
         \x1b[1;34mInstitutional - Reporting & Monetization @ Coinbase: Backend Software Engineering Intern\x1b[0m\r\n\
         \x1b[1;32mTest Engineering Division @ Georgia Tech Research Institute: Software Engineering Intern\x1b[0m\r\n\
         \x1b[1;37mCommvault: Software Engineering Intern\x1b[0m\r\n\
         \x1b[1;37mAirGap @ Arrosoft Solutions: Software Engineering Intern\x1b[0m",
    ),
    (
        "about_me/ec.txt",
        "\r\n\
         \x1b[1;35mML Research Intern @ NYU Stern Operations Management\x1b[0m\r\n\
         \x1b[1;35mHead of Development, prev Marketing Director, Development Team Member @ NYU Blockchain & Fintech Club\x1b[0m\r\n\
         \x1b[1;32mprev Insight Team Project Manager, Advanced Team Member, Insight Team Member @ NYU Stern Business & Analytics Club\x1b[0m\r\n\
         \x1b[1;37mprev Head of Engineering @ NYU Math Finance Group\x1b[0m",
    ),
    (
        "projects.txt",
        "Find my projects on my \x1b]8;;https://github.com/Shreyaas14\x1b\\GitHub\x1b]8;;\x1b\\!",
    ),
];

/// The tree built from [`ENTRIES`], before any posts arrive.
pub fn site_tree() -> Tree {
    Tree::from_table(ENTRIES)
}
