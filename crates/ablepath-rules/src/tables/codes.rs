use ablepath_core::models::code::{CodeCategory, ConditionCode};

const BODY_FUNCTIONS: &[(&str, &str)] = &[
    ("b114", "Orientation functions"),
    ("b140", "Attention functions"),
    ("b144", "Memory functions"),
    ("b152", "Emotional functions"),
    ("b167", "Mental functions of language"),
    ("b210", "Seeing functions"),
    ("b230", "Hearing functions"),
    ("b235", "Vestibular functions"),
    ("b280", "Sensation of pain"),
    ("b310", "Voice functions"),
    ("b320", "Articulation functions"),
    ("b440", "Respiration functions"),
    ("b620", "Urination functions"),
    ("b710", "Mobility of joint functions"),
    ("b730", "Muscle power functions"),
    ("b760", "Control of voluntary movement functions"),
    ("b770", "Gait pattern functions"),
];

const ACTIVITIES: &[(&str, &str)] = &[
    ("d110", "Watching"),
    ("d115", "Listening"),
    ("d166", "Reading"),
    ("d170", "Writing"),
    ("d310", "Communicating with - receiving - spoken messages"),
    ("d315", "Communicating with - receiving - nonverbal messages"),
    ("d330", "Speaking"),
    ("d360", "Using communication devices and techniques"),
    ("d410", "Changing basic body position"),
    ("d415", "Maintaining a body position"),
    ("d420", "Transferring oneself"),
    ("d430", "Lifting and carrying objects"),
    ("d440", "Fine hand use"),
    ("d445", "Hand and arm use"),
    ("d450", "Walking"),
    ("d455", "Moving around"),
    ("d460", "Moving around in different locations"),
    ("d465", "Moving around using equipment"),
    ("d470", "Using transportation"),
    ("d510", "Washing oneself"),
    ("d520", "Caring for body parts"),
    ("d530", "Toileting"),
    ("d540", "Dressing"),
    ("d550", "Eating"),
    ("d560", "Drinking"),
    ("d630", "Preparing meals"),
    ("d640", "Doing housework"),
];

const ENVIRONMENT: &[(&str, &str)] = &[
    ("e115", "Products and technology for personal use in daily living"),
    ("e120", "Products and technology for personal indoor and outdoor mobility and transportation"),
    ("e125", "Products and technology for communication"),
    ("e130", "Products and technology for education"),
    ("e150", "Design, construction and building products of buildings for public use"),
    ("e155", "Design, construction and building products of buildings for private use"),
    ("e240", "Light"),
    ("e250", "Sound"),
    ("e310", "Immediate family"),
    ("e340", "Personal care providers and personal assistants"),
    ("e355", "Health professionals"),
];

pub fn builtin() -> Vec<ConditionCode> {
    [
        (CodeCategory::BodyFunction, BODY_FUNCTIONS),
        (CodeCategory::Activity, ACTIVITIES),
        (CodeCategory::Environment, ENVIRONMENT),
    ]
    .into_iter()
    .flat_map(|(category, entries)| {
        entries.iter().map(move |(code, description)| ConditionCode {
            code: code.to_string(),
            description: description.to_string(),
            category,
        })
    })
    .collect()
}
