//! Static HTML/CSS/JS snippets for the interactive page.
//!
//! Only string templates live here; `{width}` and `{height}` markers are
//! substituted by the HTML renderer.

/// vis-network options: barnesHut physics tuned for dependency fan-outs,
/// hover tooltips, directed edges.
pub static VIS_OPTIONS: &str = r##"{
  "physics": {
    "stabilization": true,
    "barnesHut": {
      "gravitationalConstant": -8000,
      "centralGravity": 0.1,
      "springLength": 250,
      "springConstant": 0.02,
      "damping": 0.3
    }
  },
  "interaction": {
    "zoomView": true,
    "zoomSpeed": 0.2,
    "hover": true
  },
  "layout": {
    "improvedLayout": true
  },
  "manipulation": true,
  "nodes": {
    "shape": "dot",
    "size": 16,
    "font": {
      "size": 16,
      "face": "Arial",
      "color": "#111",
      "bold": true
    }
  },
  "edges": {
    "arrows": { "to": { "enabled": true } },
    "color": { "color": "#666666", "highlight": "#999999" },
    "width": 2,
    "smooth": { "type": "continuous" }
  },
  "configure": { "enabled": false }
}"##;

/// Page CSS. Sized so a print-to-PDF run captures the whole canvas.
pub static PAGE_CSS: &str = r#"<style>
@page { size: {width}px {height}px; margin: 0; }
html, body { width: {width}px; height: {height}px; margin: 0; padding: 0; overflow: hidden; display: block; }
#mynetwork {
  width: {width}px !important;
  height: {height}px !important;
  margin: 0 auto;
  background: #fff;
  border-radius: 12px;
  box-shadow: 0 2px 12px rgba(0,0,0,0.07);
  overflow: visible !important;
}
#mynetwork > canvas {
  width: {width}px !important;
  height: {height}px !important;
  object-fit: contain !important;
}
#minimalLoading { position:absolute;top:10px;left:50%;transform:translateX(-50%);font-size:22px;color:#000;z-index:1000; }
</style>
"#;

/// Minimal loading overlay: counts up while the network stabilizes, then
/// removes itself. The PDF exporter waits for this element to disappear.
pub static LOADING_JS: &str = r#"<script>
var minimalLoading = document.getElementById('minimalLoading');
if (minimalLoading) {
  minimalLoading.innerText = '0%';
  var interval = setInterval(function() {
    if (window.network && window.network.body && window.network.body.nodeIndices && window.network.body.nodeIndices.length > 0) {
      minimalLoading.innerText = '50%';
      setTimeout(function() {
        minimalLoading.innerText = '100%';
        setTimeout(function() {
          if (minimalLoading && minimalLoading.parentNode) {
            minimalLoading.parentNode.removeChild(minimalLoading);
          }
        }, 500);
      }, 500);
      clearInterval(interval);
    }
  }, 200);
}
</script>
"#;

/// Initial zoom applied once the page has loaded.
pub static ZOOM_JS: &str = r#"<script>
  window.addEventListener("load", function() {
    if (window.network) {
      var pos = window.network.getViewPosition();
      window.network.moveTo({scale: 2, position: pos});
    }
  });
</script>
"#;
