use crate::parsers::text;
use scraper::{Html, Selector};

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a Html, selector: &str) -> scraper::ElementRef<'a> {
        let selector = Selector::parse(selector).unwrap();
        doc.select(&selector).next().unwrap()
    }

    #[test]
    fn test_pieces_are_trimmed_and_non_empty() {
        let doc = Html::parse_fragment("<div>  a  <p>\n\n</p><p> b </p>\t</div>");
        let div = first(&doc, "div");
        assert_eq!(text::text_pieces(div), vec!["a", "b"]);
    }

    #[test]
    fn test_joined_text_separator() {
        let doc = Html::parse_fragment("<div><span>one</span><span>two</span></div>");
        let div = first(&doc, "div");
        assert_eq!(text::joined_text(div, "\n"), "one\ntwo");
        assert_eq!(text::joined_text(div, ""), "onetwo");
    }

    #[test]
    fn test_empty_element() {
        let doc = Html::parse_fragment("<div>   </div>");
        let div = first(&doc, "div");
        assert!(text::text_pieces(div).is_empty());
        assert_eq!(text::joined_text(div, "\n"), "");
    }

    #[test]
    fn test_comments_are_not_text() {
        let doc = Html::parse_fragment("<div>kept<!-- dropped --></div>");
        let div = first(&doc, "div");
        assert_eq!(text::joined_text(div, "\n"), "kept");
    }
}
