use crate::domain::profile::entities::{HairProfile, Mode};

/// A first answer whose routine has fewer steps than this triggers the single
/// stricter retry.
pub const MIN_ROUTINE_STEPS: usize = 4;
/// The step count the retry instructions demand.
pub const RETRY_ROUTINE_STEPS: usize = 6;

pub fn plan_instructions() -> &'static str {
    concat!(
        "You are HairHQ Hair Plan Generator, a professional stylist + hair educator.\n",
        "Be inclusive across hair types 1-4 and do NOT assume ethnicity.\n",
        "Recommend product TYPES (not brands).\n",
        "Be specific and avoid generic routines.\n",
        "Use the hair profile details (especially length, porosity, scalp, goals, issues).\n\n",
        "Return ONLY valid JSON with exactly these keys:\n",
        "summary (string), routine (array of strings), products (array of strings), ",
        "ingredients (array of strings), avoid (array of strings).\n",
        "No markdown. No extra keys.\n",
    )
}

pub fn retry_plan_instructions() -> String {
    format!(
        "{}\nIMPORTANT: Provide at least {} routine steps with frequencies.",
        plan_instructions(),
        RETRY_ROUTINE_STEPS
    )
}

pub fn plan_input(profile: &HairProfile) -> String {
    let profile_json =
        serde_json::to_string_pretty(profile).unwrap_or_else(|_| String::from("{}"));

    format!(
        "{mode_line}\n\n\
         HAIR_PROFILE_JSON:\n{profile_json}\n\n\
         Create a DETAILED plan that feels unique to this profile.\n\
         Routine should be step-by-step and actionable (frequency + what to do).\n\
         Include specific guidance for porosity/length/scalp.\n\
         Avoid one-size-fits-all advice.\n",
        mode_line = mode_line(profile.mode),
    )
}

fn mode_line(mode: Mode) -> &'static str {
    match mode {
        Mode::Men => {
            "MEN MODE: keep routine practical; include scalp/hair loss/dandruff considerations if relevant."
        }
        Mode::Women => {
            "WOMEN MODE: include styling + washday flow; align with length + goals."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::value_objects::RawHairProfile;

    fn profile(mode: &str) -> HairProfile {
        HairProfile::from_raw(RawHairProfile {
            mode: Some(mode.to_string()),
            hair_length: Some("shoulder".to_string()),
            ..RawHairProfile::default()
        })
    }

    #[test]
    fn plan_input_embeds_the_profile_json() {
        let input = plan_input(&profile("women"));
        assert!(input.contains("HAIR_PROFILE_JSON:"));
        assert!(input.contains("\"hair_length\": \"shoulder\""));
    }

    #[test]
    fn plan_input_frames_by_mode() {
        assert!(plan_input(&profile("men")).contains("MEN MODE"));
        assert!(plan_input(&profile("women")).contains("WOMEN MODE"));
    }

    #[test]
    fn retry_instructions_demand_a_longer_routine() {
        let retry = retry_plan_instructions();
        assert!(retry.starts_with(plan_instructions()));
        assert!(retry.contains("at least 6 routine steps with frequencies"));
    }
}
