use crate::catalog::{self, Dimension, QuestionKind, SCALE_LABELS};
use crate::scoring::Index;
use crate::types::report::QuizReport;
use crate::types::scoring::Standing;

pub fn to_markdown(report: &QuizReport) -> String {
    let result = &report.result;
    let archetype = &result.archetype;
    let mut output = String::new();

    output.push_str("# Energy Alignment Report\n\n");
    output.push_str(&format!("Hi {}!\n\n", result.respondent));
    output.push_str(&format!("Energy Alignment Score: {}\n\n", result.eas));

    output.push_str(&format!(
        "## {} {} (band {}, {}-{})\n\n{}\n\n",
        archetype.icon,
        archetype.name,
        archetype.band,
        archetype.range.0,
        archetype.range.1,
        archetype.description
    ));

    output.push_str("## Energy Dimensions\n\n");
    for dimension in Dimension::ALL {
        let value = result.dimensions.get(dimension);
        output.push_str(&format!(
            "- {} {} ({}): {}% ({}, {})\n",
            dimension.icon(),
            dimension.name(),
            dimension.code(),
            value,
            Standing::assess(i32::from(value), dimension.polarity()).label(),
            dimension.polarity().label().to_lowercase()
        ));
    }
    output.push('\n');

    output.push_str("## Composite Indices\n\n");
    for index in Index::ALL {
        let value = result.indices.get(index);
        output.push_str(&format!(
            "- {} {} ({}): {}% ({}, {})\n",
            index.icon(),
            index.name(),
            index.code(),
            value,
            Standing::assess(value, index.polarity()).label(),
            index.polarity().label().to_lowercase()
        ));
    }
    output.push('\n');

    output.push_str("## Key Insights\n\n");
    for insight in &result.insights {
        output.push_str(&format!("- {} {}\n", insight.icon, insight.text));
    }
    output.push('\n');

    output.push_str("## Next Step\n\n");
    output.push_str(archetype.offer);
    output.push_str("\n\n");

    if !report.issues.is_empty() {
        output.push_str("## Answer Issues\n\n");
        for issue in &report.issues {
            output.push_str(&format!("- {issue}\n"));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "---\n{} answers, fingerprint {}, generated {}\n",
        report.answered,
        report.fingerprint,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

pub fn catalog_to_markdown() -> String {
    let mut output = String::new();
    output.push_str("# Energy Alignment Quiz\n\n");

    for (number, section) in catalog::all_sections().iter().enumerate() {
        let tag = section
            .dimension
            .map(|dimension| format!(" [{}]", dimension.code()))
            .unwrap_or_default();
        output.push_str(&format!(
            "## {}. {} {}{}\n\n_{}_\n\n",
            number + 1,
            section.icon,
            section.title,
            tag,
            section.subtitle
        ));

        for question in section.questions {
            let mut notes = Vec::new();
            match question.kind {
                QuestionKind::Text { .. } => notes.push("free text".to_string()),
                QuestionKind::Single { .. } => notes.push("single choice".to_string()),
                QuestionKind::Categorical { .. } => notes.push("categorical".to_string()),
                QuestionKind::Scale { reverse } => {
                    notes.push("scale 1-5".to_string());
                    if reverse {
                        notes.push("reverse scored".to_string());
                    }
                }
            }
            if !question.scored {
                notes.push("not scored".to_string());
            }
            output.push_str(&format!(
                "- `{}` {} ({})\n",
                question.id,
                question.prompt,
                notes.join(", ")
            ));
            for option in question.kind.options() {
                match option.score {
                    Some(score) => output.push_str(&format!(
                        "  - `{}` {} = {}\n",
                        option.value, option.label, score
                    )),
                    None => output.push_str(&format!("  - `{}` {}\n", option.value, option.label)),
                }
            }
        }
        output.push('\n');
    }

    output.push_str("Scale: ");
    let scale = SCALE_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| format!("{} = {}", index + 1, label))
        .collect::<Vec<_>>()
        .join(", ");
    output.push_str(&scale);
    output.push('\n');
    output
}
