//! Static analytics panel
//!
//! Fixed summaries from the training study, authored once and never
//! recomputed at display time. Purely illustrative for the medical team;
//! there is no computation and therefore no failure path here.

use super::render::{metric_row, rule};

/// Render the analytics panel for the medical team.
#[must_use]
pub fn render_analytics(width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("  Painel de Insights para Equipe Médica".to_string());
    lines.push("  Estudo baseado em 2.111 casos reais.".to_string());
    lines.push(String::new());
    lines.push(metric_row("Acurácia do Modelo", "77.51%", "Foco Preventivo"));
    lines.push(metric_row("Principal Fator", "Genética", "Corr: 0.50"));
    lines.push(metric_row("Público Crítico", "Mulheres", "Obesidade III"));
    lines.push(String::new());
    lines.push(rule(width));
    lines.push("  Insights Estratégicos".to_string());
    lines.push(String::new());
    lines.push("  Genética vs Comportamento".to_string());
    lines.push(
        "  O histórico familiar é o preditor mais forte. Pacientes com".to_string(),
    );
    lines.push(
        "  'family_history' positivo devem entrar em protocolos de monitoramento".to_string(),
    );
    lines.push("  SCC (Contagem de Calorias) imediatamente.".to_string());
    lines.push(String::new());
    lines.push("  O Paradoxo do CAEC".to_string());
    lines.push(
        "  Dados mostram que o hábito de 'beliscar' (CAEC) reportado como 'Sempre'".to_string(),
    );
    lines.push(
        "  é menos comum nos níveis de obesidade severa do que o 'Às Vezes',".to_string(),
    );
    lines.push(
        "  sugerindo subnotificação ou mudança na qualidade calórica das refeições".to_string(),
    );
    lines.push("  principais.".to_string());
    lines.push(String::new());
    lines.push(
        "  Nota Técnica: Este modelo não utiliza Peso e Altura (IMC), focando".to_string(),
    );
    lines.push(
        "  exclusivamente em variáveis de estilo de vida para suporte à decisão".to_string(),
    );
    lines.push("  preventiva.".to_string());
    lines.push(rule(width));

    lines.join("\n")
}
