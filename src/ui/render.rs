use crate::etymology::EtymologyResponse;
use std::time::Duration;

/// Delay between the reveal of consecutive morpheme groups.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, PartialEq)]
pub struct MorphemeView {
    pub morpheme: String,
    /// `(label, value)` pairs, only for the fields the model filled in.
    pub details: Vec<(&'static str, String)>,
    pub reveal_delay: Duration,
}

/// What the results area shows after a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct EtymologyView {
    pub word: String,
    pub overall: Option<String>,
    pub morphemes: Vec<MorphemeView>,
}

/// Builds the results view for `data`, in the order the model listed the
/// morphemes. `requested_word` names the word in the fallback message.
pub fn render_etymology(data: &EtymologyResponse, requested_word: &str) -> EtymologyView {
    let morphemes = data
        .morphemes
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let details = [
                ("Type", entry.kind.as_deref()),
                ("Origin", entry.origin.as_deref()),
                ("Meaning", entry.meaning.as_deref()),
            ]
            .into_iter()
            .filter_map(|(label, value)| {
                value
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (label, v.to_string()))
            })
            .collect();

            MorphemeView {
                morpheme: entry.morpheme.clone(),
                details,
                reveal_delay: REVEAL_STAGGER * index as u32,
            }
        })
        .collect();

    EtymologyView {
        word: requested_word.to_string(),
        overall: data.overall().map(str::to_string),
        morphemes,
    }
}

impl EtymologyView {
    pub fn shows_fallback(&self) -> bool {
        self.overall.is_none() && self.morphemes.is_empty()
    }

    pub fn fallback_message(&self) -> String {
        format!("No detailed morpheme breakdown found for \"{}\".", self.word)
    }

    /// Markup for the results area. All model text is escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        if let Some(ref overall) = self.overall {
            html.push_str(&format!(
                "<p class=\"overall-etymology-text\">{}</p>",
                escape_html(overall)
            ));
        }

        if !self.morphemes.is_empty() {
            html.push_str("<div class=\"morphemes-container\">");
            for morph in &self.morphemes {
                html.push_str(&format!(
                    "<div class=\"morpheme-group\" style=\"animation-delay: {:.2}s; \
                     animation-name: fadeInAndUpMorpheme; animation-duration: 0.5s; \
                     animation-fill-mode: forwards;\">",
                    morph.reveal_delay.as_secs_f32()
                ));
                html.push_str(&format!(
                    "<div class=\"morpheme-particle\">{}</div>",
                    escape_html(&morph.morpheme)
                ));
                html.push_str("<div class=\"morpheme-details\">");
                for (label, value) in &morph.details {
                    html.push_str(&format!(
                        "<span><span class=\"detail-label\">{}:</span> {}</span>",
                        label,
                        escape_html(value)
                    ));
                }
                html.push_str("</div></div>");
            }
            html.push_str("</div>");
        } else if self.overall.is_none() {
            html.push_str(&format!("<p>{}</p>", escape_html(&self.fallback_message())));
        }

        html
    }
}

pub fn error_message(message: &str) -> String {
    format!("Sorry, couldn't fetch etymology. {}", message)
}

pub fn error_html(message: &str) -> String {
    format!(
        "<p class=\"error-message\">{}</p>",
        escape_html(&error_message(message))
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
