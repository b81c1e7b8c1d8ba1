//! Built-in demo catalog and sample request data
//!
//! A small Grade 3 mathematics catalog used when no catalog file is
//! supplied, plus a sample student and lesson context for the default
//! demonstration run.

use std::collections::HashMap;

use toolrec::catalog::Catalog;
use toolrec::domain::{
    Category, Difficulty, GroupSize, LearningContext, LevelBucket, StudentProfile, Tool,
};
use toolrec::error::Result;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the default Grade 3 math demo catalog
pub fn sample_catalog() -> Result<Catalog> {
    let mut catalog = Catalog::new();

    catalog.register(Tool {
        id: "diagnostic_place_value".to_string(),
        name: "Place Value Diagnostic Assessment".to_string(),
        description: "Quickly identifies student understanding of place value concepts up to \
                      1000. Use when starting place value unit or when students show confusion."
            .to_string(),
        category: Category::Assessment,
        difficulty: Difficulty::Beginner,
        standards: strings(&["3.NBT.A.1", "3.NBT.A.2"]),
        time_required: 15,
        materials: strings(&["physical", "digital"]),
        group_size: vec![GroupSize::Individual],
        prerequisites: vec![],
        learning_objectives: strings(&["identify_place_value", "understand_digit_positions"]),
        accessibility_features: HashMap::from([
            ("visual_support".to_string(), true),
            ("auditory_support".to_string(), false),
        ]),
        effectiveness_data: HashMap::from([
            (LevelBucket::BelowGrade, 0.85),
            (LevelBucket::AtGrade, 0.90),
            (LevelBucket::AboveGrade, 0.75),
        ]),
        setup_instructions: "Prepare number cards 1-1000, place value chart".to_string(),
        execution_steps: strings(&[
            "Present 3-digit number",
            "Ask student to identify value of each digit",
            "Record responses and note error patterns",
        ]),
        variations: strings(&["verbal_only", "written_only", "manipulative_support"]),
        next_steps: strings(&["place_value_manipulatives", "expanded_form_practice"]),
    })?;

    catalog.register(Tool {
        id: "multiplication_arrays".to_string(),
        name: "Visual Multiplication Arrays".to_string(),
        description: "Physical or digital arrays to visualize multiplication concepts. Use when \
                      introducing multiplication or when students need concrete representation."
            .to_string(),
        category: Category::InteractiveLearning,
        difficulty: Difficulty::Beginner,
        standards: strings(&["3.OA.A.1"]),
        time_required: 20,
        materials: strings(&["physical", "digital"]),
        group_size: vec![GroupSize::Individual, GroupSize::SmallGroup],
        prerequisites: strings(&["counting_fluency", "addition_understanding"]),
        learning_objectives: strings(&["visualize_multiplication", "understand_repeated_addition"]),
        accessibility_features: HashMap::from([
            ("visual_support".to_string(), true),
            ("motor_adaptations".to_string(), true),
        ]),
        effectiveness_data: HashMap::from([
            (LevelBucket::BelowGrade, 0.92),
            (LevelBucket::AtGrade, 0.88),
            (LevelBucket::AboveGrade, 0.70),
        ]),
        setup_instructions: "Provide counters, grid paper, or digital array tool".to_string(),
        execution_steps: strings(&[
            "Present multiplication problem",
            "Guide student to create array representation",
            "Count total to verify answer",
            "Discuss relationship to repeated addition",
        ]),
        variations: strings(&["real_world_contexts", "larger_numbers", "missing_factor_arrays"]),
        next_steps: strings(&["times_table_practice", "word_problem_solving"]),
    })?;

    catalog.register(Tool {
        id: "adaptive_math_facts".to_string(),
        name: "Adaptive Math Facts Practice".to_string(),
        description: "AI-powered practice that adjusts difficulty based on student performance. \
                      Use for building fluency in basic operations."
            .to_string(),
        category: Category::Practice,
        difficulty: Difficulty::Adaptive,
        standards: strings(&["3.OA.C.7"]),
        time_required: 15,
        materials: strings(&["digital"]),
        group_size: vec![GroupSize::Individual],
        prerequisites: strings(&["basic_operation_understanding"]),
        learning_objectives: strings(&["build_fluency", "increase_speed", "improve_accuracy"]),
        accessibility_features: HashMap::from([
            ("visual_support".to_string(), true),
            ("auditory_support".to_string(), true),
        ]),
        effectiveness_data: HashMap::from([
            (LevelBucket::BelowGrade, 0.78),
            (LevelBucket::AtGrade, 0.85),
            (LevelBucket::AboveGrade, 0.82),
        ]),
        setup_instructions: "Load adaptive practice software".to_string(),
        execution_steps: strings(&[
            "Student completes initial assessment",
            "System adjusts difficulty based on performance",
            "Student practices at appropriate level",
            "System tracks progress and adjusts",
        ]),
        variations: strings(&["timed_mode", "untimed_mode", "game_mode"]),
        next_steps: strings(&["application_problems", "mixed_operations"]),
    })?;

    catalog.register(Tool {
        id: "fraction_pizza_party".to_string(),
        name: "Fraction Pizza Party Game".to_string(),
        description: "Interactive game where students partition pizzas into equal parts and \
                      identify fractions. Use when introducing fractions or for engaging practice."
            .to_string(),
        category: Category::GameBased,
        difficulty: Difficulty::Intermediate,
        standards: strings(&["3.NF.A.3", "3.G.A.2"]),
        time_required: 25,
        materials: strings(&["digital", "physical"]),
        group_size: vec![GroupSize::SmallGroup],
        prerequisites: strings(&["equal_parts_understanding"]),
        learning_objectives: strings(&["identify_fractions", "partition_shapes", "compare_fractions"]),
        accessibility_features: HashMap::from([
            ("visual_support".to_string(), true),
            ("collaborative_support".to_string(), true),
        ]),
        effectiveness_data: HashMap::from([
            (LevelBucket::BelowGrade, 0.80),
            (LevelBucket::AtGrade, 0.88),
            (LevelBucket::AboveGrade, 0.85),
        ]),
        setup_instructions: "Load game or prepare pizza fraction manipulatives".to_string(),
        execution_steps: strings(&[
            "Students take turns partitioning pizzas",
            "Identify fractions created",
            "Compare different partitions",
            "Discuss equivalent fractions discovered",
        ]),
        variations: strings(&["different_shapes", "equivalent_fractions", "ordering_fractions"]),
        next_steps: strings(&["fraction_number_line", "fraction_word_problems"]),
    })?;

    Ok(catalog)
}

/// Sample student profile for the default demo run
pub fn sample_profile() -> StudentProfile {
    StudentProfile {
        student_id: "sarah_j_123".to_string(),
        current_level: LevelBucket::BelowGrade,
        learning_style: strings(&["visual", "kinesthetic"]),
        attention_span: 15,
        previous_tool_effectiveness: HashMap::from([("multiplication_arrays".to_string(), 0.85)]),
        current_struggles: strings(&["multiplication", "place_value"]),
        mastered_concepts: strings(&["counting_fluency", "addition_understanding"]),
        accessibility_needs: strings(&["visual_support"]),
    }
}

/// Sample lesson context for the default demo run
pub fn sample_context() -> LearningContext {
    LearningContext {
        time_available: 20,
        materials_available: strings(&["digital", "physical"]),
        group_size: GroupSize::Individual,
        lesson_phase: "introduction".to_string(),
        standards_focus: strings(&["3.OA.A.1", "3.NBT.A.1"]),
    }
}
