use maca_core::{GenerationRequest, UserProfile};

pub(crate) fn system_framing(profile: &UserProfile) -> String {
    format!(
        "Você é o Maçã ART 2025. Estúdio de Design IA Profissional.\n\
         Empresa: {} | Ramo: {}\n\
         Responda sempre em PT-BR.",
        profile.company_name, profile.company_type
    )
}

pub(crate) fn text_prompt(request: &GenerationRequest) -> String {
    format!("Modo: {}. Briefing: {}", request.mode, request.prompt_text())
}

pub(crate) fn image_prompt(request: &GenerationRequest) -> String {
    format!(
        "High Quality Social Media Design for {}: {}",
        request.mode,
        request.prompt_text()
    )
}

pub(crate) fn video_prompt(request: &GenerationRequest, profile: &UserProfile) -> String {
    format!(
        "Professional video for {}: {}",
        profile.company_type,
        request.prompt_text()
    )
}
