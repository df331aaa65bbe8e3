//! Route enumeration and sitemap emission.
//!
//! Enumerates every page the site has, in a fixed order: home, the chapters
//! index, then each chapter followed by its verses (the same linear order as
//! [`address::all_verse_keys`](crate::address::all_verse_keys)), then the
//! static pages (about, donate, contact). Pure computation over the catalog —
//! no I/O, no randomness — so the sitemap is byte-stable between builds.

use crate::catalog;
use serde::Serialize;

/// Sitemap change frequency, serialized lowercase per sitemaps.org.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

/// One site page: URL plus the SEO strings the presentation layer renders.
#[derive(Debug, Clone, Serialize)]
pub struct SiteRoute {
    pub url: String,
    pub title: String,
    pub description: String,
    pub priority: f32,
    pub changefreq: ChangeFreq,
}

/// Every route on the site, in render order. One entry per valid verse
/// address plus the fixed pages around them.
pub fn generate_all_routes(base_url: &str) -> Vec<SiteRoute> {
    let base_url = base_url.trim_end_matches('/');
    let mut routes = Vec::with_capacity(catalog::total_verse_count() as usize + 23);

    routes.push(SiteRoute {
        url: base_url.to_string(),
        title: "Bhagavad Gita - Sacred Text & Wisdom".to_string(),
        description: "Complete Bhagavad Gita with Sanskrit verses, English translations, and spiritual commentary".to_string(),
        priority: 1.0,
        changefreq: ChangeFreq::Weekly,
    });

    routes.push(SiteRoute {
        url: format!("{base_url}/chapters"),
        title: "All 18 Chapters - Bhagavad Gita".to_string(),
        description: "Explore all 18 chapters of the Bhagavad Gita with detailed verse-by-verse breakdown".to_string(),
        priority: 0.9,
        changefreq: ChangeFreq::Monthly,
    });

    for chapter in catalog::all_chapters() {
        routes.push(SiteRoute {
            url: format!("{base_url}/chapters/{}", chapter.number),
            title: format!(
                "Chapter {}: {} - Bhagavad Gita",
                chapter.number, chapter.title
            ),
            description: format!(
                "{} - Complete chapter with {} verses",
                chapter.description, chapter.verse_count
            ),
            priority: 0.8,
            changefreq: ChangeFreq::Monthly,
        });

        for verse in 1..=chapter.verse_count {
            routes.push(SiteRoute {
                url: format!("{base_url}/chapters/{}/verse/{verse}", chapter.number),
                title: format!(
                    "Chapter {}, Verse {verse} - {}",
                    chapter.number, chapter.title
                ),
                description: format!(
                    "Sanskrit shloka, romanized pronunciation, and English translation of verse {}.{verse}",
                    chapter.number
                ),
                priority: 0.7,
                changefreq: ChangeFreq::Yearly,
            });
        }
    }

    routes.push(SiteRoute {
        url: format!("{base_url}/about"),
        title: "About - Bhagavad Gita Wisdom".to_string(),
        description: "Learn about our mission to share the timeless wisdom of the Bhagavad Gita"
            .to_string(),
        priority: 0.6,
        changefreq: ChangeFreq::Monthly,
    });

    routes.push(SiteRoute {
        url: format!("{base_url}/donate"),
        title: "Support Our Mission - Donate".to_string(),
        description: "Support the preservation and sharing of Bhagavad Gita wisdom".to_string(),
        priority: 0.5,
        changefreq: ChangeFreq::Monthly,
    });

    routes.push(SiteRoute {
        url: format!("{base_url}/contact"),
        title: "Contact Us - Bhagavad Gita".to_string(),
        description: "Get in touch with our team for questions about the Bhagavad Gita".to_string(),
        priority: 0.5,
        changefreq: ChangeFreq::Monthly,
    });

    routes
}

/// The full sitemaps.org XML document for all routes.
pub fn generate_sitemap(base_url: &str) -> String {
    let routes = generate_all_routes(base_url);

    let mut xml = String::with_capacity(routes.len() * 140);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for route in &routes {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", route.url));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            route.changefreq.as_str()
        ));
        xml.push_str(&format!("    <priority>{}</priority>\n", route.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Title and description of the route whose URL ends with `pathname`, for
/// per-page SEO metadata. `None` if no route matches.
pub fn route_metadata(base_url: &str, pathname: &str) -> Option<(String, String)> {
    generate_all_routes(base_url)
        .into_iter()
        .find(|r| r.url.ends_with(pathname))
        .map(|r| (r.title, r.description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address;

    const BASE: &str = "https://bhagavad-gita.org";

    // 1 home + 1 chapters index + 18 chapters + 700 verses + 3 static pages
    const EXPECTED_ROUTES: usize = 723;

    #[test]
    fn route_count_is_fixed_pages_plus_verses() {
        assert_eq!(generate_all_routes(BASE).len(), EXPECTED_ROUTES);
    }

    #[test]
    fn one_verse_route_per_verse_key_in_order() {
        let routes = generate_all_routes(BASE);
        let verse_urls: Vec<&str> = routes
            .iter()
            .map(|r| r.url.as_str())
            .filter(|u| u.contains("/verse/"))
            .collect();

        let keys = address::all_verse_keys();
        assert_eq!(verse_urls.len(), keys.len());
        for (url, key) in verse_urls.iter().zip(&keys) {
            assert_eq!(
                *url,
                format!("{BASE}/chapters/{}/verse/{}", key.chapter, key.verse)
            );
        }
    }

    #[test]
    fn chapter_route_precedes_its_verses() {
        let routes = generate_all_routes(BASE);
        let ch1 = routes
            .iter()
            .position(|r| r.url == format!("{BASE}/chapters/1"))
            .unwrap();
        assert_eq!(routes[ch1 + 1].url, format!("{BASE}/chapters/1/verse/1"));
        // 47 verses in chapter 1, then chapter 2
        assert_eq!(routes[ch1 + 48].url, format!("{BASE}/chapters/2"));
    }

    #[test]
    fn home_first_static_pages_last() {
        let routes = generate_all_routes(BASE);
        assert_eq!(routes[0].url, BASE);
        assert_eq!(routes[0].priority, 1.0);

        let tail: Vec<&str> = routes[routes.len() - 3..]
            .iter()
            .map(|r| r.url.as_str())
            .collect();
        assert_eq!(
            tail,
            vec![
                format!("{BASE}/about"),
                format!("{BASE}/donate"),
                format!("{BASE}/contact"),
            ]
        );
    }

    #[test]
    fn trailing_slash_on_base_url_normalized() {
        let routes = generate_all_routes("https://example.org/");
        assert_eq!(routes[0].url, "https://example.org");
        assert_eq!(routes[1].url, "https://example.org/chapters");
    }

    #[test]
    fn chapter_titles_interpolated() {
        let routes = generate_all_routes(BASE);
        let ch2 = routes
            .iter()
            .find(|r| r.url == format!("{BASE}/chapters/2"))
            .unwrap();
        assert_eq!(ch2.title, "Chapter 2: Sankhya Yoga - Bhagavad Gita");
        assert!(ch2.description.ends_with("Complete chapter with 72 verses"));
    }

    #[test]
    fn sitemap_has_one_url_element_per_route() {
        let xml = generate_sitemap(BASE);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert_eq!(xml.matches("<url>").count(), EXPECTED_ROUTES);
        assert!(xml.contains(&format!("<loc>{BASE}/chapters/18/verse/78</loc>")));
        assert!(xml.contains("<changefreq>yearly</changefreq>"));
    }

    #[test]
    fn sitemap_is_deterministic() {
        assert_eq!(generate_sitemap(BASE), generate_sitemap(BASE));
    }

    #[test]
    fn route_metadata_matches_suffix() {
        let (title, _) = route_metadata(BASE, "/chapters/2/verse/5").unwrap();
        assert_eq!(title, "Chapter 2, Verse 5 - Sankhya Yoga");
        assert!(route_metadata(BASE, "/nowhere").is_none());
    }
}
