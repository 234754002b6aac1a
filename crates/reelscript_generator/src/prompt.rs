//! The fixed prompt template.

use reelscript_core::ScriptInputs;

/// Instructions sent ahead of every request: output format, language and
/// style rules, and phrases the script must avoid.
pub const SYSTEM_PROMPT: &str = "
إنت كاتب سكريبتات ريلز عقاري مصري (Cairo / New Cairo).
هدفك تعمل ريل Organic بدون بيع مباشر.
المخرجات لازم تكون \"جاهزة للتنفيذ\" على InShot:
- جمل قصيرة
- كلام مصري طبيعي
- تقسيم زمني واضح
- نصوص شاشة قصيرة

اخرج النتيجة بهذا الشكل بالظبط (لا تضف أي مقدمات أو خاتمة، فقط المحتوى):

1) HOOK
(سطر واحد قوي لأول 2-3 ثواني)

2) VOICEOVER SCRIPT
(مصري، مقسم سطور قصيرة، وكل سطر قدامه زمن تقريبي بالثواني مثل [0-3])

3) SHOT LIST
(لقطة 1..لقطة N - وصف اللقطة + ON-SCREEN TEXT)

4) CTA DM
(سؤال واحد الناس تبعت بيه رسالة)

5) CAPTION
(سطرين)

6) HASHTAGS
(10-15)

7) 3 ALTERNATIVE HOOKS

8) 3 ALTERNATIVE CTAS

9) PEXELS VIDEO SEARCH KEYWORDS
قسّم الكلمات حسب كل لقطة، وكل لقطة فيها:
- الزمن (مثال: 0-3s)
- 3 إلى 5 كلمات بحث إنجليزي مناسبة لموقع Pexels Videos
لازم الكلمات تكون بسيطة، واضحة، ومناسبة لفيديوهات 3–6 ثواني.

ممنوع تقول: احجز الآن / عروض محدودة / أسعار.
لازم الكلام يبان خبرة ويعمل فلترة للعملاء.
";

/// Sales phrases the system prompt forbids.
pub const FORBIDDEN_PHRASES: &[&str] = &["احجز الآن", "عروض محدودة", "أسعار"];

/// Render the per-request instruction. Fields are inserted verbatim.
///
/// # Examples
///
/// ```
/// use reelscript_core::{ClientType, ReelDuration, ScriptInputs, VideoAngle};
/// use reelscript_generator::build_user_prompt;
///
/// let inputs = ScriptInputs::from_choices(
///     ClientType::VipLuxury,
///     "Mountain View iCity",
///     VideoAngle::Warning,
///     ReelDuration::Sixty,
/// );
/// let prompt = build_user_prompt(&inputs);
/// assert!(prompt.contains("(Mountain View iCity)"));
/// assert!(prompt.contains("(60 ثانية)"));
/// ```
pub fn build_user_prompt(inputs: &ScriptInputs) -> String {
    format!(
        "
المدخلات:
- نوع العميل: ({client_type})
- المنطقة/المشروع: ({area})
- زاوية الفيديو: ({angle})
- مدة الريل: ({duration} ثانية)
- ستايل: (خفيف ذكي + ثقة + من غير مبالغة)

اكتب السكريبت الآن.
",
        client_type = inputs.client_type(),
        area = inputs.area(),
        angle = inputs.angle(),
        duration = inputs.duration(),
    )
}

/// The full prompt: system instruction, a newline, then the user instruction.
pub fn build_prompt(inputs: &ScriptInputs) -> String {
    format!("{}\n{}", SYSTEM_PROMPT, build_user_prompt(inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelscript_core::{ClientType, ReelDuration, SECTION_HEADINGS, VideoAngle};

    fn inputs() -> ScriptInputs {
        ScriptInputs::from_choices(
            ClientType::FamilyHome,
            "Madinaty",
            VideoAngle::Filtering,
            ReelDuration::FortyFive,
        )
    }

    #[test]
    fn system_prompt_lists_numbered_headings_in_order() {
        let mut last = 0;
        for (i, heading) in SECTION_HEADINGS.iter().take(9).enumerate() {
            let marker = format!("{}) {}", i + 1, heading);
            let position = SYSTEM_PROMPT
                .find(&marker)
                .unwrap_or_else(|| panic!("missing {marker}"));
            assert!(position >= last);
            last = position;
        }
    }

    #[test]
    fn system_prompt_forbids_sales_phrases() {
        for phrase in FORBIDDEN_PHRASES {
            assert!(SYSTEM_PROMPT.contains(phrase));
        }
    }

    #[test]
    fn user_prompt_interpolates_labels() {
        let prompt = build_user_prompt(&inputs());
        assert!(prompt.contains("(سكن عائلي (Family Home))"));
        assert!(prompt.contains("(فلترة (Filtering))"));
        assert!(prompt.contains("(Madinaty)"));
        assert!(prompt.contains("(45 ثانية)"));
    }

    #[test]
    fn full_prompt_joins_with_newline() {
        let prompt = build_prompt(&inputs());
        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert_eq!(&prompt[SYSTEM_PROMPT.len()..SYSTEM_PROMPT.len() + 1], "\n");
        assert!(prompt.ends_with(&build_user_prompt(&inputs())));
    }
}
