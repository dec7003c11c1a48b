use chrono::{DateTime, TimeZone};

const RULE: &str = "═══════════════════════════════════════════════════════════";

fn section(out: &mut String, title: &str, lines: &[&str]) {
    out.push_str(title);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}

/// The blank daily health check-in form, headed with `now`'s date and time.
pub fn render_checkin_form<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let date = now.format("%A, %B %-d").to_string();
    let time = now.format("%I:%M %p").to_string();

    let mut out = String::from("\n");
    out.push_str("╔══════════════════════════════════════════════════════════╗\n");
    out.push_str("║               💪 DAILY HEALTH CHECK-IN                   ║\n");
    out.push_str("╠══════════════════════════════════════════════════════════╣\n");
    out.push_str(&format!("║  {:<55} ║\n", date));
    out.push_str(&format!("║  {:<55} ║\n", time));
    out.push_str("╚══════════════════════════════════════════════════════════╝\n\n");

    section(
        &mut out,
        "🏃 ACTIVITY TRACKING",
        &[
            "□ Morning workout",
            "□ Evening walk/run",
            "□ Yoga/Stretching",
            "□ Strength training",
            "□ Sports activity",
            "",
            "Steps today: _________",
            "Active minutes: _______",
            "",
        ],
    );

    section(
        &mut out,
        "🥗 NUTRITION LOG",
        &[
            "Breakfast: _________________________________",
            "Lunch:     _________________________________",
            "Dinner:    _________________________________",
            "Snacks:    _________________________________",
            "",
            "💧 Water intake: ☐☐☐☐☐☐☐☐ (8 glasses)",
            "☕ Caffeine: _____ cups",
            "🍷 Alcohol: _____ drinks",
            "",
        ],
    );

    section(
        &mut out,
        "⚡ ENERGY & WELLNESS",
        &[
            "Energy level (1-10): ____",
            "Mood (1-10): ____",
            "Stress level (1-10): ____",
            "Sleep quality last night (1-10): ____",
            "Hours slept: ____",
            "",
        ],
    );

    section(
        &mut out,
        "📝 SYMPTOMS & NOTES",
        &[
            "□ Headache      □ Fatigue       □ Digestive issues",
            "□ Joint pain    □ Muscle ache   □ Allergies",
            "□ Other: _________________________________",
            "",
            "Notes: _____________________________________",
            "       _____________________________________",
            "",
        ],
    );

    section(
        &mut out,
        "🎯 TOMORROW'S FITNESS PLAN",
        &[
            "Workout type: _______________________________",
            "Time: _______________",
            "Duration: ___________",
            "Goals: ______________________________________",
            "",
        ],
    );

    out.push_str(RULE);
    out.push('\n');
    section(
        &mut out,
        "💡 QUICK UPDATE COMMANDS:",
        &[
            "",
            "  motus update \"completed exercise 30 minutes\"",
            "  motus update \"drank 6 glasses of water\"",
            "  motus update \"energy level 8\"",
            "  motus update \"sleep quality 9\"",
            "  motus update \"10000 steps today\"",
            "",
        ],
    );

    section(
        &mut out,
        "📊 WEEKLY TRENDS:",
        &[
            "Average sleep: 7.5 hours",
            "Average steps: 8,500",
            "Workout streak: 3 days",
            "Water goal met: 5/7 days",
            "",
        ],
    );

    out
}
