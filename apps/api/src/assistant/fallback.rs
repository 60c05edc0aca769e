//! Canned answers used when the completion API cannot be reached.

/// Keyword groups in priority order. The first group with any keyword
/// contained in the lowercased message supplies the answer.
pub const FALLBACK_GROUPS: &[(&[&str], &str)] = &[
    (
        &["api", "documentation"],
        "Vignesh has extensive experience with API documentation, having worked on comprehensive \
         API references throughout his 13+ year career. He's particularly skilled with REST APIs, \
         OpenAPI specifications, and interactive documentation platforms. You can see examples of \
         his API documentation work in the 'API Documentation' section of this portfolio.",
    ),
    (
        &["tool", "software"],
        "Vignesh is expert with professional documentation tools including Adobe FrameMaker, \
         Document360, Arbortext Editor, and DITA XML. He also has experience with AI-powered \
         workflows and docs-as-code processes using Git and various authoring platforms. You can \
         view his detailed skill breakdown in the 'Skills' section.",
    ),
    (
        &["experience", "background"],
        "Vignesh has 13+ years of technical writing experience, currently serving as Lead \
         Technical Writer at Ushur Inc. His proven track record includes managing teams of 4 \
         writers, delivering 600+ structured articles, and winning the Ushur Customer Impact \
         Award for documentation transformation.",
    ),
    (
        &["sample", "work", "portfolio"],
        "You can find several work samples in the 'Sample Documents' section, including user \
         guides, API documentation, PaaS documentation, and technical assignments. Each \
         demonstrates different aspects of his technical writing expertise and leadership \
         capabilities.",
    ),
    (
        &["contact", "hire", "available"],
        "You can contact Vignesh directly at vigneshsrini.88@gmail.com or connect with him on \
         LinkedIn at linkedin.com/in/vigneshsrinivasan. He's always interested in discussing new \
         opportunities and technical writing projects.",
    ),
    (
        &["hobby", "photography", "personal"],
        "Outside of technical writing, Vignesh is passionate about photography! You can check out \
         his photography work at his blog: https://vframephotography.blogspot.com/",
    ),
];

/// Used when no keyword group matches.
pub const GENERIC_FALLBACK: &str = "I'm having trouble accessing detailed information right now, \
    but I'd be happy to help you learn about Vignesh's technical writing expertise. You can also \
    contact him directly at vigneshsrini.88@gmail.com for specific questions about his experience \
    and availability.";

/// Picks the canned answer for `message`. Matching is case-insensitive
/// substring containment; group order decides ties.
pub fn fallback_response(message: &str) -> &'static str {
    let message = message.to_lowercase();
    FALLBACK_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, answer)| *answer)
        .unwrap_or(GENERIC_FALLBACK)
}
