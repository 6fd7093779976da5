//! Demo dataset generator
//!
//! When no collector is configured or the fetch fails, the statistics panel
//! still has to show something plausible. This generates synthetic result
//! rows in the same raw shape the aggregation engine consumes.

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::Value;
use survey_core::catalog::Category;
use survey_core::record::AnswerRecord;

fn random_single<R: Rng>(rng: &mut R, category: Category) -> String {
    let entries = category.entries();
    entries[rng.gen_range(0..entries.len())].id.to_string()
}

fn random_multi<R: Rng>(rng: &mut R, category: Category, max: usize) -> Vec<String> {
    let count = rng.gen_range(1..=max);
    category
        .entries()
        .choose_multiple(rng, count)
        .map(|e| e.id.to_string())
        .collect()
}

/// Generate `n` synthetic answer records as raw JSON rows
pub fn generate_sample_records(n: usize) -> Vec<Value> {
    let mut rng = rand::thread_rng();
    let mut rows = Vec::with_capacity(n);

    for i in 0..n {
        let is_suno_user = rng.gen_bool(0.4);
        let mut record = AnswerRecord::default();
        record.nickname = format!("User{i}");
        record.role = Some(random_single(&mut rng, Category::Role));
        record.goals = random_multi(&mut rng, Category::Goals, 2);
        record.preferred_content = random_multi(&mut rng, Category::Content, 2);
        record.tools = random_multi(&mut rng, Category::Tools, 3);
        record.suno_reason = if is_suno_user {
            None
        } else {
            Some(random_single(&mut rng, Category::SunoReason))
        };
        record.motivation = Some(random_single(&mut rng, Category::Motivation));
        record.formats = random_multi(&mut rng, Category::Formats, 2);
        record.courses = random_multi(&mut rng, Category::Courses, 2);
        record.ideal_channel = "Demo answer".to_string();
        record.is_suno_user = is_suno_user;

        // Serialization of a valid record cannot fail.
        rows.push(serde_json::to_value(&record).unwrap_or(Value::Null));
    }

    rows
}
