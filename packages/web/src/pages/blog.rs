//! Blog index and article pages

use dioxus::prelude::*;
use site_core::text::parse_blocks;
use site_core::BlogPost;

use crate::components::{
    long_date, BlogCard, Breadcrumbs, ContentBlocks, Crumb, CtaSection, CtaStyle,
    RelatedPostCard,
};

/// Related articles shown under a post
pub const RELATED_POSTS: usize = 3;

/// Blog index. `posts` are expected newest first.
#[component]
pub fn BlogPage(posts: Vec<BlogPost>) -> Element {
    rsx! {
        main {
            Breadcrumbs { trail: vec![Crumb::link("Home", "/"), Crumb::current("Blog")] }

            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { "Blog" }
                        p {
                            "Marketing insights, strategies, and tips for plastic surgeons, medical spas, and aesthetic practices."
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    div { class: "grid grid-2",
                        for post in posts {
                            BlogCard { key: "{post.slug}", post: post.clone() }
                        }
                    }
                }
            }

            section { class: "section section-alt",
                div { class: "container",
                    div { class: "section-header",
                        h2 { "Stay Updated" }
                        p {
                            "Get the latest marketing insights for aesthetic practices delivered to your inbox."
                        }
                        a { href: "/contact", class: "button", "Subscribe to Our Newsletter" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BlogPostPage(post: BlogPost, related: Vec<BlogPost>) -> Element {
    let blocks = parse_blocks(&post.content);
    let published = long_date(post.publish_date);
    let iso = post.publish_date.format("%Y-%m-%d").to_string();

    rsx! {
        main {
            Breadcrumbs {
                trail: vec![
                    Crumb::link("Home", "/"),
                    Crumb::link("Blog", "/blog"),
                    Crumb::current(post.title.clone()),
                ],
            }

            header { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        div { class: "blog-meta",
                            time { "datetime": "{iso}", "{published}" }
                            span { class: "meta-separator", "•" }
                            span { "{post.category}" }
                        }
                        h1 { "{post.title}" }
                        p { class: "byline", "By {post.author}" }
                    }
                }
            }

            article { class: "section",
                div { class: "container",
                    div { class: "article-content",
                        ContentBlocks { blocks }
                    }
                    if !post.tags.is_empty() {
                        div { class: "article-content article-tags",
                            for tag in post.tags.iter() {
                                span { key: "{tag}", class: "tag", "{tag}" }
                            }
                        }
                    }
                }
            }

            if !related.is_empty() {
                section { class: "section section-alt",
                    div { class: "container",
                        div { class: "section-header",
                            h2 { "Related Articles" }
                        }
                        div { class: "grid grid-3",
                            for other in related.iter() {
                                RelatedPostCard { key: "{other.slug}", post: other.clone() }
                            }
                        }
                    }
                }
            }

            CtaSection {
                style: CtaStyle::Band,
                heading: "Ready to Grow Your Practice?",
                body: "Schedule a consultation to discuss how Plastix Marketing can help.",
            }
        }
    }
}
