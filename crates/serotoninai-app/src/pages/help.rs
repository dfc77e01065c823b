//! Help & FAQ page.

use console::style;

pub const SUPPORT_EMAIL: &str = "support@serotoninai.research";

pub const FAQS: [(&str, &str); 10] = [
    (
        "What is a receptor?",
        "A receptor is a protein that receives signals from molecules, triggering biological effects. Think of \
         it as a 'lock' that drugs (keys) bind to, initiating cellular responses that control mood, memory, \
         pain, and more.",
    ),
    (
        "Why do we bind with receptors?",
        "Binding starts the drug's action, deciding how strong and specific the effect will be. Strong binding \
         (high pKi) means the compound is more likely to be an effective drug, while weak binding means \
         minimal therapeutic effect.",
    ),
    (
        "What is pKi?",
        "pKi is the logarithmic measure of binding strength: higher values mean stronger binding and more \
         potent compounds. A pKi ≥ 5 is generally considered significant for drug development. It's calculated \
         as the negative logarithm of the inhibition constant (Ki).",
    ),
    (
        "What is HIA?",
        "Human Intestinal Absorption (HIA) checks how well a drug is absorbed orally. High HIA means the \
         compound can be taken as a pill and absorbed through the gut into the bloodstream. Low HIA may require \
         injection or reformulation.",
    ),
    (
        "What is BBB penetration?",
        "BBB (Blood-Brain Barrier) determines if a compound can enter the brain to act on CNS receptors. \
         Crossing the BBB is crucial for neurological drugs like antidepressants and psychedelics. If it can't \
         cross, it's only suitable for peripheral action.",
    ),
    (
        "What is Lipinski's Rule of Five?",
        "Lipinski's Rule predicts oral drug-likeness and bioavailability. Rules: MW ≤ 500, logP ≤ 5, H-bond \
         donors ≤ 5, acceptors ≤ 10. Compounds that pass are more likely to be orally absorbed and distributed \
         properly in the body.",
    ),
    (
        "Why calculate Lipinski's Rule?",
        "To identify molecules that can be safely and effectively taken orally. It filters out compounds that \
         are too large, too greasy, or too polar to pass through membranes and reach their target.",
    ),
    (
        "What is the Rule of Three?",
        "Rule of Three finds simple, flexible molecular fragments used in early drug discovery. Criteria: \
         MW ≤ 300, logP ≤ 3, ≤3 donors/acceptors. These 'fragment-like' molecules are ideal starting points for \
         building larger drug candidates.",
    ),
    (
        "What is the Applicability Domain?",
        "Applicability Domain ensures prediction reliability by checking if your molecule fits within the \
         model's known range. If inside the domain, predictions are trustworthy. If outside, results should be \
         interpreted with caution.",
    ),
    (
        "How accurate are predictions?",
        "Models are trained on QSAR/QSPR datasets using experimental data. Accuracy depends on how similar your \
         compound is to the training data. Predictions provide valuable guidance but should be validated \
         through experimental testing before drug development decisions.",
    ),
];

pub const DISCLAIMER: &str = "SerotoninAI is a research tool intended for educational and scientific purposes \
only. Predictions should be validated through experimental methods before any drug development decisions.";

pub fn render() -> String {
    let mut out = crate::render::title("Help & FAQ", "Common questions and definitions");
    out.push('\n');
    for (question, answer) in FAQS {
        out.push_str(&format!("{}\n  {}\n\n", style(question).bold(), answer));
    }
    out.push_str(&format!(
        "{}\nFor technical support, research collaborations, or questions about the prediction models, \
         please contact us: {}\n\n",
        style("Need More Help?").bold().underlined(),
        style(SUPPORT_EMAIL).cyan()
    ));
    out.push_str(&format!("{} {}\n", style("Important Note:").yellow().bold(), DISCLAIMER));
    out
}
