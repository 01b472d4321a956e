//! Structured body content

use dioxus::prelude::*;
use site_core::text::{paragraphs, Block, Inline};

/// Blog body blocks as h2/h3/ul/p elements
#[component]
pub fn ContentBlocks(blocks: Vec<Block>) -> Element {
    let nodes = blocks.iter().map(render_block);

    rsx! {
        {nodes}
    }
}

fn render_block(block: &Block) -> Element {
    match block {
        Block::Heading2(text) => rsx! { h2 { "{text}" } },
        Block::Heading3(text) => rsx! { h3 { "{text}" } },
        Block::BulletList(items) => rsx! {
            ul {
                for item in items.iter() {
                    li { "{item}" }
                }
            }
        },
        Block::Paragraph(runs) => {
            let runs = runs.iter().map(render_inline);
            rsx! {
                p { {runs} }
            }
        }
    }
}

fn render_inline(run: &Inline) -> Element {
    match run {
        Inline::Text(text) => rsx! { "{text}" },
        Inline::Bold(text) => rsx! { strong { "{text}" } },
    }
}

/// Plain blank-line separated paragraphs (service and industry bodies)
#[component]
pub fn Paragraphs(#[props(into)] content: String) -> Element {
    rsx! {
        for paragraph in paragraphs(&content) {
            p { "{paragraph}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_core::text::parse_blocks;

    #[test]
    fn bold_runs_render_as_strong() {
        let blocks = parse_blocks("## Title\n\nSome **bold** text.\n- one\n- two\n");
        let html = dioxus_ssr::render_element(rsx! { ContentBlocks { blocks } });

        assert!(html.contains("<h2>Title</h2>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<li>two</li>"));
        assert!(!html.contains("**"));
    }

    #[test]
    fn paragraphs_skip_blank_chunks() {
        let html = dioxus_ssr::render_element(rsx! {
            Paragraphs { content: "First.\n\n\n\nSecond." }
        });

        assert_eq!(html.matches("<p>").count(), 2);
    }
}
