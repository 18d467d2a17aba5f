//! Server-rendered HTML pages.
//!
//! Plain `format!`-built markup, no template engine. Every interpolated
//! user value goes through [`escape`] first.

use wiki_terms::Language;

use crate::domains::pitches::Pitch;

/// HTML-escape a user-supplied value.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - PitchForge</title>
<style>
body {{ font-family: Georgia, serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
nav a {{ margin-right: 1rem; }}
.pitch {{ border: 1px solid #ccc; border-radius: 6px; padding: 1rem; margin: 1rem 0; }}
.pitch .terms {{ color: #666; font-size: 0.9rem; }}
.actions a {{ margin-right: 0.75rem; }}
textarea {{ width: 100%; min-height: 12rem; }}
.error {{ color: #a00; }}
</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/action">Pitches</a><a href="/deleted">Trash</a></nav>
{body}
</body>
</html>
"#
    )
}

/// The submission form.
pub fn home_page() -> String {
    let options: String = Language::ALL
        .iter()
        .map(|l| format!("<option value=\"{0}\">{0}</option>", l.name()))
        .collect();
    layout(
        "Home",
        &format!(
            r#"<h1>PitchForge</h1>
<p>Give us a word. We will scrape three of its neighbors and pitch you the product of your dreams.</p>
<form action="/action" method="post">
<input type="text" name="prompt" maxlength="250" placeholder="octopus">
<select name="language">{options}</select>
<button type="submit">Generate</button>
</form>"#
        ),
    )
}

fn pitch_card(pitch: &Pitch, in_trash: bool) -> String {
    let actions = if in_trash {
        format!(
            r#"<a href="/delete/{id}">Restore</a><a href="/deleted/{id}">Delete forever</a>"#,
            id = pitch.id
        )
    } else {
        format!(
            r#"<a href="/display/{id}">View</a><a href="/edit/{id}">Edit</a><a href="/delete/{id}">Trash</a>"#,
            id = pitch.id
        )
    };
    format!(
        r#"<div class="pitch">
<div class="terms">#{id} &middot; {prompt} &rarr; {one}, {two}, {three} &middot; {created}</div>
<p>{text}</p>
<div class="actions">{actions}</div>
</div>"#,
        id = pitch.id,
        prompt = escape(&pitch.prompt),
        one = escape(&pitch.one),
        two = escape(&pitch.two),
        three = escape(&pitch.three),
        created = pitch.created_at.format("%Y-%m-%d %H:%M"),
        text = escape(&pitch.pitch),
    )
}

/// A listing page: active pitches, the trash, or everything.
pub fn listing_page(title: &str, pitches: &[Pitch], in_trash: bool) -> String {
    let cards: String = pitches.iter().map(|p| pitch_card(p, in_trash)).collect();
    let empty = if pitches.is_empty() {
        "<p>Nothing here yet.</p>"
    } else {
        ""
    };
    layout(title, &format!("<h1>{title}</h1>{empty}{cards}"))
}

/// Single pitch view.
pub fn display_page(pitch: &Pitch) -> String {
    layout(&format!("Pitch #{}", pitch.id), &pitch_card(pitch, pitch.deleted))
}

/// Edit form for the pitch text.
pub fn edit_page(pitch: &Pitch) -> String {
    layout(
        &format!("Edit #{}", pitch.id),
        &format!(
            r#"<h1>Edit pitch #{id}</h1>
<form action="/edit/{id}" method="post">
<textarea name="pitch" maxlength="4096">{text}</textarea>
<button type="submit">Save</button>
</form>"#,
            id = pitch.id,
            text = escape(&pitch.pitch),
        ),
    )
}

/// Failure page for empty submissions.
pub fn action_fail_page() -> String {
    layout(
        "Try again",
        r#"<h1>That won't work</h1>
<p>You have to give us at least one word. <a href="/">Go back</a> and try again.</p>"#,
    )
}

/// Standard not-found page.
pub fn not_found_page() -> String {
    layout("Not found", "<h1>404</h1><p>No such pitch.</p>")
}

/// Terse inline failure, for persistence and generation faults.
pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!("<h1>Oh no</h1><p class=\"error\">{}</p>", escape(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn pitch() -> Pitch {
        Pitch {
            id: 7,
            prompt: "octo<pus>".to_string(),
            one: "Cephalopod".to_string(),
            two: "Mollusc".to_string(),
            three: "Ocean".to_string(),
            pitch: "Buy \"everything\" & more.".to_string(),
            created_at: Utc::now(),
            deleted: false,
        }
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }

    #[test]
    fn cards_escape_user_data() {
        let html = display_page(&pitch());
        assert!(html.contains("octo&lt;pus&gt;"));
        assert!(html.contains("Buy &quot;everything&quot; &amp; more."));
        assert!(!html.contains("octo<pus>"));
    }

    #[test]
    fn trash_cards_offer_restore_and_purge() {
        let mut p = pitch();
        p.deleted = true;
        let html = listing_page("Trash", std::slice::from_ref(&p), true);
        assert!(html.contains("/delete/7"));
        assert!(html.contains("/deleted/7"));
        assert!(!html.contains("/edit/7"));
    }

    #[test]
    fn home_lists_every_language() {
        let html = home_page();
        for l in Language::ALL {
            assert!(html.contains(l.name()));
        }
    }
}
