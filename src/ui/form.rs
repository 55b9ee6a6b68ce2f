//! Interactive survey session
//!
//! Line-based form driving the full pipeline. Selects and sliders keep the
//! answers inside the training domains by re-prompting; the encoder never
//! sees free text. Each "Executar Diagnóstico Preditivo" trigger re-runs
//! the pipeline from scratch, and the survey answers are dropped once the
//! result is rendered.

use super::analytics::render_analytics;
use super::logging::LogLevel;
use super::render::{render_diagnosis, render_header, rule};
use crate::artifacts::Assets;
use crate::encode::{
    encode, Frequency, Gender, SurveyResponse, YesNo, ACTIVITY_RANGE, AGE_RANGE, VEGETABLE_RANGE,
    WATER_RANGE,
};
use crate::predict::diagnose;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Panel width used for all rendered surfaces.
pub const PANEL_WIDTH: usize = 72;

/// One interactive session over arbitrary input/output streams.
///
/// Reads answers line by line, so tests can feed a `Cursor` and capture a
/// `Vec<u8>`.
pub struct Session<'a, R, W> {
    assets: &'a Assets,
    input: R,
    output: W,
    level: LogLevel,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session against the cached artifacts.
    pub fn new(assets: &'a Assets, input: R, output: W) -> Self {
        Self {
            assets,
            input,
            output,
            level: LogLevel::Normal,
        }
    }

    /// Override the output verbosity.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Run the session until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        if self.level.allows(LogLevel::Normal) {
            writeln!(self.output, "{}", render_header(PANEL_WIDTH))?;
        }
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "  [1] Aplicação Preditiva (Deploy)")?;
            writeln!(self.output, "  [2] Visão Analítica (Insights Médicos)")?;
            writeln!(self.output, "  [0] Sair")?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                break;
            };
            match choice.as_str() {
                "1" => {
                    if !self.predictive_surface()? {
                        break;
                    }
                }
                "2" => writeln!(self.output, "{}", render_analytics(PANEL_WIDTH))?,
                "0" => break,
                _ => writeln!(self.output, "Opção inválida.")?,
            }
        }
        Ok(())
    }

    /// Collect a survey, confirm the trigger, run the pipeline and render
    /// the result. Returns false when input ended mid-form.
    fn predictive_surface(&mut self) -> io::Result<bool> {
        writeln!(self.output, "{}", rule(PANEL_WIDTH))?;
        writeln!(self.output, "  Nova Avaliação Preventiva")?;
        writeln!(
            self.output,
            "  Preencha os dados comportamentais para identificar o risco do paciente."
        )?;

        let Some(survey) = self.collect_survey()? else {
            return Ok(false);
        };
        let Some(trigger) = self.select("Executar Diagnóstico Preditivo?", &YesNo::ALL)? else {
            return Ok(false);
        };
        if trigger == YesNo::Sim {
            if self.level.allows(LogLevel::Verbose) {
                let row = encode(&survey);
                let fields: Vec<String> =
                    row.iter().map(|(c, v)| format!("{c}={v}")).collect();
                writeln!(self.output, "  Linha codificada: {}", fields.join(" "))?;
            }
            match diagnose(self.assets, &survey) {
                Ok(diagnosis) => {
                    writeln!(self.output, "{}", render_diagnosis(&diagnosis, PANEL_WIDTH))?;
                }
                Err(e) => {
                    writeln!(self.output, "  Falha no diagnóstico: {e}")?;
                    writeln!(self.output, "  Ajuste as respostas e tente novamente.")?;
                }
            }
        }
        // survey dropped here; submissions are never persisted
        Ok(true)
    }

    /// Prompt every form field. Returns None when input ends.
    fn collect_survey(&mut self) -> io::Result<Option<SurveyResponse>> {
        let Some(gender) = self.select("Gênero", &Gender::ALL)? else {
            return Ok(None);
        };
        let Some(age) = self.slider("Idade", AGE_RANGE, 25)? else {
            return Ok(None);
        };
        let Some(family_history) =
            self.select("Histórico Familiar de Sobrepeso?", &YesNo::ALL)?
        else {
            return Ok(None);
        };
        let Some(snacking) = self.select("Come entre as refeições?", &Frequency::ALL)? else {
            return Ok(None);
        };
        let Some(activity_days) =
            self.slider("Atividade Física (dias/semana)", ACTIVITY_RANGE, 1)?
        else {
            return Ok(None);
        };
        let Some(high_calorie_food) =
            self.select("Consome alimentos calóricos com frequência?", &YesNo::ALL)?
        else {
            return Ok(None);
        };
        let Some(vegetable_level) =
            self.slider("Consumo de Vegetais (1: Pouco, 3: Muito)", VEGETABLE_RANGE, 2)?
        else {
            return Ok(None);
        };
        let Some(water_intake) = self.slider("Consumo de Água (Litros/dia)", WATER_RANGE, 2)?
        else {
            return Ok(None);
        };
        let Some(calorie_monitoring) = self.select("Monitora Calorias?", &YesNo::ALL)? else {
            return Ok(None);
        };
        let Some(alcohol) = self.select("Consumo de Álcool", &Frequency::ALL)? else {
            return Ok(None);
        };

        Ok(Some(SurveyResponse {
            gender,
            age,
            family_history,
            snacking,
            activity_days,
            high_calorie_food,
            vegetable_level,
            water_intake,
            calorie_monitoring,
            alcohol,
        }))
    }

    /// Numbered single-choice prompt. Accepts the option number or the
    /// exact label; re-prompts otherwise. Returns None at end of input.
    fn select<T: Copy + fmt::Display>(
        &mut self,
        label: &str,
        options: &[T],
    ) -> io::Result<Option<T>> {
        loop {
            writeln!(self.output, "  {label}")?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "    [{}] {option}", i + 1)?;
            }
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            if let Ok(n) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&n) {
                    return Ok(Some(options[n - 1]));
                }
            }
            if let Some(option) = options.iter().find(|o| o.to_string() == answer) {
                return Ok(Some(*option));
            }
            writeln!(self.output, "  Opção inválida, tente novamente.")?;
        }
    }

    /// Bounded numeric prompt. Empty answer takes the default; out-of-range
    /// or non-numeric answers re-prompt. Returns None at end of input.
    fn slider(
        &mut self,
        label: &str,
        (lo, hi): (u8, u8),
        default: u8,
    ) -> io::Result<Option<u8>> {
        loop {
            write!(self.output, "  {label} [{lo}-{hi}, padrão {default}]: ")?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(default));
            }
            if let Ok(value) = answer.parse::<u8>() {
                if (lo..=hi).contains(&value) {
                    return Ok(Some(value));
                }
            }
            writeln!(self.output, "  Valor fora do intervalo [{lo}-{hi}].")?;
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}
