use serde::Serialize;
use tera::{Context, Error as TeraError, Tera};

use crate::locale::LocaleHint;

const SEARCH_QUERY_TEMPLATE: &str = include_str!("prompts/search_query.md");
const LEGAL_CONTEXT_TEMPLATE: &str = include_str!("prompts/legal_context.md");

pub const CONTEXT_OPEN_MARKER: &str = "=== CURRENT LEGAL INFORMATION";
pub const CONTEXT_CLOSE_MARKER: &str = "=== END OF CURRENT LEGAL INFORMATION ===";
pub const CITATION_DIRECTIVE: &str = "When you rely on the information above, cite the specific law and article number. Wrap every link to an official government source in <official-source>...</official-source> tags.";

pub fn load_prompt<T: Serialize>(template: &str, context_data: &T) -> Result<String, TeraError> {
    let mut tera = Tera::default();
    tera.add_raw_template("inline_template", template)?;
    let context = Context::from_serialize(context_data)?;
    let rendered = tera.render("inline_template", &context)?;
    Ok(rendered.trim_end().to_string())
}

#[derive(Serialize)]
struct SearchQueryContext<'a> {
    query: &'a str,
    country: &'a str,
    code: &'a str,
    year: i32,
}

/// Prompt sent to the search model for one user question
pub fn search_query_prompt(
    query: &str,
    hint: Option<&LocaleHint>,
    year: i32,
) -> Result<String, TeraError> {
    let context = SearchQueryContext {
        query,
        country: hint.map(|h| h.country.as_str()).unwrap_or_default(),
        code: hint.map(|h| h.code.as_str()).unwrap_or_default(),
        year,
    };
    load_prompt(SEARCH_QUERY_TEMPLATE, &context)
}

#[derive(Serialize)]
struct LegalContextContext<'a> {
    date: &'a str,
    search: &'a str,
}

/// Delimited search block followed by the citation directive
pub fn legal_context_block(date: &str, search: &str) -> Result<String, TeraError> {
    load_prompt(LEGAL_CONTEXT_TEMPLATE, &LegalContextContext { date, search })
}
